//! # Totals Aggregator
//!
//! Combines line items and the bill's discount policy into subtotal,
//! discount, and grand total.
//!
//! ## The Two Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Totals by Discount Scope                       │
//! │                                                                     │
//! │  ITEM scope                                                         │
//! │    line_total_i = max(0, gross_i − discount_i(gross_i))             │
//! │    subtotal     = Σ line_total_i        (discounts absorbed)        │
//! │    discount     = Σ discount_i          (informational only)        │
//! │    total        = subtotal              (already net)               │
//! │                                                                     │
//! │  TRANSACTION scope                                                  │
//! │    line_total_i = gross_i               (no per-item discount)      │
//! │    subtotal     = Σ gross_i                                         │
//! │    discount     = resolve(subtotal)                                 │
//! │    total        = subtotal − discount   (NOT clamped; may go        │
//! │                                          negative if misconfigured) │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-item line totals are clamped at zero; the grand total is not.

use crate::discount::{DiscountPolicy, DiscountScope};
use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Bill Totals
// =============================================================================

/// The three figures of a bill summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillTotals {
    /// Sum of line totals (net under Item scope, gross under Transaction).
    pub subtotal: Money,

    /// Under Transaction scope: the amount subtracted from the subtotal.
    /// Under Item scope: the sum of per-item discounts, for display only;
    /// it is already absorbed into the subtotal and never subtracted again.
    pub discount: Money,

    /// The grand total. Not clamped at zero.
    pub total: Money,
}

impl BillTotals {
    /// Computes bill totals for the given items under the given policy.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::discount::{Discount, DiscountPolicy};
    /// use saral_core::money::Money;
    /// use saral_core::totals::BillTotals;
    /// use saral_core::types::LineItem;
    ///
    /// let items = vec![
    ///     LineItem::new("Saree", Money::from_paise(50000), 2),
    ///     LineItem::new("Blouse", Money::from_paise(30000), 1),
    /// ];
    /// let policy = DiscountPolicy::Transaction(Discount::Percentage(1000));
    /// let totals = BillTotals::compute(&items, &policy);
    /// assert_eq!(totals.subtotal.paise(), 130000); // ₹1300
    /// assert_eq!(totals.discount.paise(), 13000);  // ₹130
    /// assert_eq!(totals.total.paise(), 117000);    // ₹1170
    /// ```
    pub fn compute(items: &[LineItem], policy: &DiscountPolicy) -> BillTotals {
        let scope = policy.scope();
        let subtotal: Money = items.iter().map(|item| line_total(item, scope)).sum();

        match policy {
            DiscountPolicy::Item => {
                let discount: Money = items
                    .iter()
                    .map(|item| item.discount.amount(item.gross()))
                    .sum();
                BillTotals {
                    subtotal,
                    discount,
                    total: subtotal,
                }
            }
            DiscountPolicy::Transaction(d) => {
                let discount = d.amount(subtotal);
                BillTotals {
                    subtotal,
                    discount,
                    total: subtotal - discount,
                }
            }
        }
    }
}

/// The displayed total of one line under the given scope.
///
/// Under Item scope the per-item discount is subtracted and the result is
/// clamped at zero; under Transaction scope the line total is the raw
/// gross amount.
pub fn line_total(item: &LineItem, scope: DiscountScope) -> Money {
    let gross = item.gross();
    match scope {
        DiscountScope::Transaction => gross,
        DiscountScope::Item => (gross - item.discount.amount(gross)).clamp_at_zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Silk Saree", Money::from_paise(50000), 2),
            LineItem::new("Cotton Blouse", Money::from_paise(30000), 1),
        ]
    }

    #[test]
    fn test_transaction_scope_percentage() {
        // 500×2 + 300×1 at 10% off: subtotal 1300, discount 130, total 1170
        let policy = DiscountPolicy::Transaction(Discount::Percentage(1000));
        let totals = BillTotals::compute(&sample_items(), &policy);

        assert_eq!(totals.subtotal.paise(), 130000);
        assert_eq!(totals.discount.paise(), 13000);
        assert_eq!(totals.total.paise(), 117000);
    }

    #[test]
    fn test_transaction_scope_line_totals_are_gross() {
        let items = sample_items();
        for item in &items {
            assert_eq!(
                line_total(item, DiscountScope::Transaction),
                item.gross()
            );
        }
    }

    #[test]
    fn test_item_scope_fixed_discount() {
        // Item 1: fixed ₹50 off → 950; item 2: none → 300; total 1250
        let mut items = sample_items();
        items[0].discount = Discount::Fixed(Money::from_paise(5000));

        let totals = BillTotals::compute(&items, &DiscountPolicy::Item);
        assert_eq!(line_total(&items[0], DiscountScope::Item).paise(), 95000);
        assert_eq!(line_total(&items[1], DiscountScope::Item).paise(), 30000);
        assert_eq!(totals.subtotal.paise(), 125000);
        assert_eq!(totals.discount.paise(), 5000);
        // Item-scope discounts are absorbed; total equals subtotal
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_item_scope_line_total_clamped_at_zero() {
        // Fixed discount larger than the line: clamp to 0, never negative
        let mut items = sample_items();
        items[1].discount = Discount::Fixed(Money::from_paise(99999));

        let totals = BillTotals::compute(&items, &DiscountPolicy::Item);
        assert_eq!(line_total(&items[1], DiscountScope::Item).paise(), 0);
        assert_eq!(totals.subtotal.paise(), 100000);
    }

    #[test]
    fn test_transaction_discount_may_exceed_subtotal() {
        // ₹2000 fixed discount on a ₹1300 bill → total -₹700, preserved
        let policy = DiscountPolicy::Transaction(Discount::Fixed(Money::from_paise(200000)));
        let totals = BillTotals::compute(&sample_items(), &policy);

        assert_eq!(totals.subtotal.paise(), 130000);
        assert_eq!(totals.total.paise(), -70000);
        assert!(totals.total.is_negative());
    }

    #[test]
    fn test_zero_quantity_line_counts_as_zero() {
        // Unparseable quantity input becomes 0 upstream; the line stays
        // in the list and contributes nothing
        let mut items = sample_items();
        items[0].quantity = 0;

        let totals = BillTotals::compute(&items, &DiscountPolicy::Item);
        assert_eq!(totals.subtotal.paise(), 30000);
    }

    #[test]
    fn test_empty_item_list() {
        let totals = BillTotals::compute(&[], &DiscountPolicy::Item);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }
}
