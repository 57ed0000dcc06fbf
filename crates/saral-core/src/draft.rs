//! # Bill Draft Reducer
//!
//! The in-progress bill form as an explicit pure reducer:
//! `(state, event) → state'`. The host environment (whatever shell drives
//! the form) owns event delivery and recomputation scheduling; this
//! module owns the state transitions and nothing else.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Draft Reducer Flow                             │
//! │                                                                     │
//! │  keystroke / click                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DraftEvent ──► BillDraft::apply(event) ──► new BillDraft           │
//! │                                                  │                  │
//! │                                                  ▼                  │
//! │                              line_items() / totals() derived views  │
//! │                                                                     │
//! │  Submit: SubmitStarted sets the in-flight flag; the host refuses    │
//! │  to issue a second save until SubmitFinished clears it.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse-or-Default Policy
//! Numeric form fields (price, quantity, discount value) are held as raw
//! strings exactly as typed. Resolution runs them through a dedicated
//! parse-or-default step: input that fails to parse is treated as zero,
//! and the line stays in the item list. This is deliberate policy, not
//! incidental coercion; see [`parse_rupees_or_zero`] and friends.

use chrono::NaiveDate;

use crate::discount::{Discount, DiscountKind, DiscountPolicy, DiscountScope};
use crate::money::Money;
use crate::totals::BillTotals;
use crate::types::{BillStatus, LineItem, PaymentMode};

// =============================================================================
// Parse-or-Default Steps
// =============================================================================

/// Parses a rupee amount from form input; malformed input is zero.
pub fn parse_rupees_or_zero(raw: &str) -> Money {
    Money::parse_rupees(raw).unwrap_or(Money::zero())
}

/// Parses a quantity from form input; malformed input is zero.
///
/// A zero quantity keeps the line in the list contributing nothing;
/// validation later rejects it before assembly.
pub fn parse_quantity_or_zero(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Parses a percentage from form input into basis points; malformed
/// input is zero. `"12.5"` → 1250 bps. Values above 100% are kept.
pub fn parse_percent_bps_or_zero(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(pct) if pct.is_finite() && pct >= 0.0 => (pct * 100.0).round() as u32,
        _ => 0,
    }
}

// =============================================================================
// Draft State
// =============================================================================

/// One item row of the draft form, fields held as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem {
    pub name: String,
    /// Raw price input (rupees).
    pub price: String,
    /// Raw quantity input.
    pub quantity: String,
    /// Raw per-item discount value (rupees or percent, per `discount_kind`).
    pub discount: String,
    pub discount_kind: DiscountKind,
}

impl Default for DraftItem {
    fn default() -> Self {
        DraftItem {
            name: String::new(),
            price: String::new(),
            quantity: "1".to_string(),
            discount: "0".to_string(),
            discount_kind: DiscountKind::Fixed,
        }
    }
}

impl DraftItem {
    /// Resolves this row into a calculation-ready line item.
    fn to_line_item(&self) -> LineItem {
        let discount = match self.discount_kind {
            DiscountKind::Fixed => Discount::Fixed(parse_rupees_or_zero(&self.discount)),
            DiscountKind::Percentage => {
                Discount::Percentage(parse_percent_bps_or_zero(&self.discount))
            }
        };
        LineItem {
            name: self.name.clone(),
            unit_price: parse_rupees_or_zero(&self.price),
            quantity: parse_quantity_or_zero(&self.quantity),
            discount,
        }
    }

    /// Resets the discount entry to its default (zero, Fixed).
    fn clear_discount(&mut self) {
        self.discount = "0".to_string();
        self.discount_kind = DiscountKind::Fixed;
    }
}

/// The complete in-progress bill form state.
///
/// No shared mutable state: `apply` consumes the draft and returns the
/// next one. Line totals are never stored; they are recomputed from the
/// resolved items on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub customer_name: String,
    pub customer_phone: String,
    /// Calendar date selected by the user (time of day is supplied at
    /// assembly from the wall clock).
    pub bill_date: NaiveDate,
    pub items: Vec<DraftItem>,
    /// Set once per bill; switching discards prior item discount entries.
    pub discount_scope: DiscountScope,
    /// Raw transaction-level discount value (used only under Transaction).
    pub discount: String,
    pub discount_kind: DiscountKind,
    pub status: BillStatus,
    pub payment_mode: PaymentMode,
    /// One outstanding save per draft; set by `SubmitStarted`.
    pub save_in_flight: bool,
}

impl BillDraft {
    /// A fresh draft for the given date, with one empty item row.
    pub fn new(bill_date: NaiveDate) -> Self {
        BillDraft {
            customer_name: String::new(),
            customer_phone: String::new(),
            bill_date,
            items: vec![DraftItem::default()],
            discount_scope: DiscountScope::Transaction,
            discount: "0".to_string(),
            discount_kind: DiscountKind::Fixed,
            status: BillStatus::Unpaid,
            payment_mode: PaymentMode::Cash,
            save_in_flight: false,
        }
    }

    /// Resolved calculation-ready line items (parse-or-default applied).
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(DraftItem::to_line_item).collect()
    }

    /// The bill's discount policy under the current scope.
    pub fn policy(&self) -> DiscountPolicy {
        match self.discount_scope {
            DiscountScope::Item => DiscountPolicy::Item,
            DiscountScope::Transaction => {
                let discount = match self.discount_kind {
                    DiscountKind::Fixed => Discount::Fixed(parse_rupees_or_zero(&self.discount)),
                    DiscountKind::Percentage => {
                        Discount::Percentage(parse_percent_bps_or_zero(&self.discount))
                    }
                };
                DiscountPolicy::Transaction(discount)
            }
        }
    }

    /// Current bill totals for the form summary.
    pub fn totals(&self) -> BillTotals {
        BillTotals::compute(&self.line_items(), &self.policy())
    }

    /// Applies one event, producing the next draft state.
    ///
    /// Events with out-of-range item indices are ignored; the draft is
    /// returned unchanged. Removal of the last remaining row is ignored
    /// too, so a draft always keeps at least one row.
    pub fn apply(mut self, event: DraftEvent) -> BillDraft {
        match event {
            DraftEvent::CustomerName(name) => self.customer_name = name,
            DraftEvent::CustomerPhone(phone) => self.customer_phone = phone,
            DraftEvent::BillDate(date) => self.bill_date = date,

            DraftEvent::AddItem => self.items.push(DraftItem::default()),
            DraftEvent::RemoveItem(index) => {
                if self.items.len() > 1 && index < self.items.len() {
                    self.items.remove(index);
                }
            }
            DraftEvent::ItemName { index, name } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.name = name;
                }
            }
            DraftEvent::ItemPrice { index, raw } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.price = raw;
                }
            }
            DraftEvent::ItemQuantity { index, raw } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = raw;
                }
            }
            DraftEvent::ItemDiscount { index, raw } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.discount = raw;
                }
            }
            DraftEvent::ItemDiscountKind { index, kind } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.discount_kind = kind;
                }
            }

            DraftEvent::DiscountScope(scope) => {
                if scope != self.discount_scope {
                    self.discount_scope = scope;
                    // Prior per-item discount entries are discarded for
                    // good: switching back does not restore them
                    for item in &mut self.items {
                        item.clear_discount();
                    }
                }
            }
            DraftEvent::DiscountValue(raw) => self.discount = raw,
            DraftEvent::DiscountKind(kind) => self.discount_kind = kind,

            DraftEvent::Status(status) => {
                self.status = status;
            }
            DraftEvent::PaymentMode(mode) => self.payment_mode = mode,

            DraftEvent::SubmitStarted => self.save_in_flight = true,
            DraftEvent::SubmitFinished => self.save_in_flight = false,
        }
        self
    }
}

// =============================================================================
// Events
// =============================================================================

/// Everything that can happen to a bill draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    CustomerName(String),
    CustomerPhone(String),
    BillDate(NaiveDate),

    AddItem,
    RemoveItem(usize),
    ItemName { index: usize, name: String },
    ItemPrice { index: usize, raw: String },
    ItemQuantity { index: usize, raw: String },
    ItemDiscount { index: usize, raw: String },
    ItemDiscountKind { index: usize, kind: DiscountKind },

    /// Switch between Transaction and Item scope. Resets every item's
    /// discount entry to zero/Fixed.
    DiscountScope(DiscountScope),
    DiscountValue(String),
    DiscountKind(DiscountKind),

    Status(BillStatus),
    PaymentMode(PaymentMode),

    /// The host began a save request; re-submission is blocked.
    SubmitStarted,
    /// The save resolved (success or failure); submission unblocks.
    SubmitFinished,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_items() -> BillDraft {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        BillDraft::new(date)
            .apply(DraftEvent::ItemName {
                index: 0,
                name: "Silk Saree".to_string(),
            })
            .apply(DraftEvent::ItemPrice {
                index: 0,
                raw: "500".to_string(),
            })
            .apply(DraftEvent::ItemQuantity {
                index: 0,
                raw: "2".to_string(),
            })
            .apply(DraftEvent::AddItem)
            .apply(DraftEvent::ItemName {
                index: 1,
                name: "Cotton Blouse".to_string(),
            })
            .apply(DraftEvent::ItemPrice {
                index: 1,
                raw: "300".to_string(),
            })
    }

    #[test]
    fn test_parse_or_default_steps() {
        assert_eq!(parse_rupees_or_zero("500").paise(), 50000);
        assert_eq!(parse_rupees_or_zero("garbage").paise(), 0);
        assert_eq!(parse_rupees_or_zero("").paise(), 0);

        assert_eq!(parse_quantity_or_zero("3"), 3);
        assert_eq!(parse_quantity_or_zero("3.5"), 0);
        assert_eq!(parse_quantity_or_zero("x"), 0);

        assert_eq!(parse_percent_bps_or_zero("10"), 1000);
        assert_eq!(parse_percent_bps_or_zero("12.5"), 1250);
        assert_eq!(parse_percent_bps_or_zero("150"), 15000);
        assert_eq!(parse_percent_bps_or_zero("-5"), 0);
        assert_eq!(parse_percent_bps_or_zero("pct"), 0);
    }

    #[test]
    fn test_transaction_scope_totals() {
        let draft = draft_with_items()
            .apply(DraftEvent::DiscountKind(DiscountKind::Percentage))
            .apply(DraftEvent::DiscountValue("10".to_string()));

        let totals = draft.totals();
        assert_eq!(totals.subtotal.paise(), 130000);
        assert_eq!(totals.discount.paise(), 13000);
        assert_eq!(totals.total.paise(), 117000);
    }

    #[test]
    fn test_item_scope_totals() {
        let draft = draft_with_items()
            .apply(DraftEvent::DiscountScope(DiscountScope::Item))
            .apply(DraftEvent::ItemDiscount {
                index: 0,
                raw: "50".to_string(),
            });

        let totals = draft.totals();
        assert_eq!(totals.subtotal.paise(), 125000);
        assert_eq!(totals.total.paise(), 125000);
        assert_eq!(totals.discount.paise(), 5000);
    }

    #[test]
    fn test_malformed_input_line_stays_in_list() {
        let draft = draft_with_items().apply(DraftEvent::ItemPrice {
            index: 1,
            raw: "three hundred".to_string(),
        });

        let items = draft.line_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].unit_price.paise(), 0);
        assert_eq!(draft.totals().subtotal.paise(), 100000);
    }

    #[test]
    fn test_scope_switch_discards_item_discounts() {
        let draft = draft_with_items()
            .apply(DraftEvent::DiscountScope(DiscountScope::Item))
            .apply(DraftEvent::ItemDiscountKind {
                index: 0,
                kind: DiscountKind::Percentage,
            })
            .apply(DraftEvent::ItemDiscount {
                index: 0,
                raw: "25".to_string(),
            })
            .apply(DraftEvent::DiscountScope(DiscountScope::Transaction));

        // Every entry reset to zero/Fixed and line totals back to gross
        for item in &draft.items {
            assert_eq!(item.discount, "0");
            assert_eq!(item.discount_kind, DiscountKind::Fixed);
        }
        assert_eq!(draft.totals().subtotal.paise(), 130000);

        // Switching back does NOT restore the discarded entries
        let back = draft.apply(DraftEvent::DiscountScope(DiscountScope::Item));
        assert_eq!(back.items[0].discount, "0");
        assert_eq!(back.totals().total.paise(), 130000);
    }

    #[test]
    fn test_same_scope_event_keeps_entries() {
        let draft = draft_with_items()
            .apply(DraftEvent::DiscountScope(DiscountScope::Item))
            .apply(DraftEvent::ItemDiscount {
                index: 0,
                raw: "50".to_string(),
            })
            .apply(DraftEvent::DiscountScope(DiscountScope::Item));

        assert_eq!(draft.items[0].discount, "50");
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let draft = BillDraft::new(date).apply(DraftEvent::RemoveItem(0));
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let draft = draft_with_items().apply(DraftEvent::ItemPrice {
            index: 99,
            raw: "1".to_string(),
        });
        assert_eq!(draft.items[0].price, "500");
    }

    #[test]
    fn test_submit_in_flight_flag() {
        let draft = draft_with_items().apply(DraftEvent::SubmitStarted);
        assert!(draft.save_in_flight);
        let draft = draft.apply(DraftEvent::SubmitFinished);
        assert!(!draft.save_in_flight);
    }
}
