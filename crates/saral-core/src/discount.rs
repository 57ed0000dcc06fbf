//! # Discount Resolver
//!
//! Discount types and the resolution rule that turns a configured
//! discount into a money amount.
//!
//! ## Scope Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Discount Scopes                                │
//! │                                                                     │
//! │  Transaction scope                 Item scope                       │
//! │  ─────────────────                 ──────────                       │
//! │  one discount on the               independent discount per         │
//! │  running subtotal                  line item, absorbed into         │
//! │                                    each line total                  │
//! │                                                                     │
//! │  Exactly ONE scope is active per bill. The policy is a tagged       │
//! │  union, so the inactive scope's fields simply don't exist.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution Contract
//! - `Percentage(bps)` on base `b` yields `b * bps / 10000` (rounded)
//! - `Fixed(v)` yields `v`
//! - The result is never negative for valid (non-negative) inputs
//! - The result is NOT clamped to the base: a percentage above 100% or a
//!   fixed value above the base is allowed; the totals aggregator clamps
//!   line totals at zero, while a transaction-level discount may drive
//!   the grand total negative

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Discount
// =============================================================================

/// Whether a discount value is a fixed rupee amount or a percentage.
///
/// Used in draft form state and events; the resolved configuration is the
/// [`Discount`] union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Fixed rupee amount.
    Fixed,
    /// Percentage of the base amount.
    Percentage,
}

impl Default for DiscountKind {
    fn default() -> Self {
        DiscountKind::Fixed
    }
}

/// A configured discount: fixed rupees or a percentage in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01%, so 1000 bps = 10%. Integer bps keep percentage
/// math exact; a form input of `"12.5"` percent becomes 1250 bps.
/// Values above 10000 bps (100%) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discount {
    /// Fixed rupee amount, subtracted as-is.
    Fixed(Money),
    /// Percentage of the base, in basis points.
    Percentage(u32),
}

impl Discount {
    /// No discount at all.
    #[inline]
    pub const fn none() -> Self {
        Discount::Fixed(Money::zero())
    }

    /// Checks whether this discount resolves to nothing on any base.
    pub const fn is_none(&self) -> bool {
        match self {
            Discount::Fixed(v) => v.is_zero(),
            Discount::Percentage(bps) => *bps == 0,
        }
    }

    /// The kind of this discount (for form round-trips).
    pub const fn kind(&self) -> DiscountKind {
        match self {
            Discount::Fixed(_) => DiscountKind::Fixed,
            Discount::Percentage(_) => DiscountKind::Percentage,
        }
    }

    /// Resolves the discount amount for a given base.
    ///
    /// `base` is the raw pre-discount amount: unit price × quantity for a
    /// line item, the running subtotal for a transaction-level discount.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::discount::Discount;
    /// use saral_core::money::Money;
    ///
    /// let subtotal = Money::from_paise(130000); // ₹1300.00
    /// let ten_pct = Discount::Percentage(1000);
    /// assert_eq!(ten_pct.amount(subtotal).paise(), 13000); // ₹130.00
    ///
    /// let flat = Discount::Fixed(Money::from_paise(5000));
    /// assert_eq!(flat.amount(subtotal).paise(), 5000);
    /// ```
    pub fn amount(&self, base: Money) -> Money {
        match self {
            Discount::Fixed(v) => *v,
            Discount::Percentage(bps) => {
                // i128 to prevent overflow on large amounts
                let paise = (base.paise() as i128 * *bps as i128 + 5000) / 10000;
                Money::from_paise(paise as i64)
            }
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::none()
    }
}

// =============================================================================
// Scope & Policy
// =============================================================================

/// Whether a discount applies once to the whole transaction or
/// independently per line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountScope {
    /// One discount on the bill subtotal.
    Transaction,
    /// Per-line-item discounts, absorbed into line totals.
    Item,
}

impl Default for DiscountScope {
    fn default() -> Self {
        DiscountScope::Transaction
    }
}

/// The discount policy of a bill, fixed at creation time.
///
/// Modelled as a tagged union so the transaction-level discount exists
/// only when the Transaction scope is active; under Item scope the
/// per-item discounts on the line items are the sole mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountPolicy {
    /// One discount applied to the running subtotal.
    Transaction(Discount),
    /// Discounts live on the individual line items.
    Item,
}

impl DiscountPolicy {
    /// The scope this policy operates at.
    pub const fn scope(&self) -> DiscountScope {
        match self {
            DiscountPolicy::Transaction(_) => DiscountScope::Transaction,
            DiscountPolicy::Item => DiscountScope::Item,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
