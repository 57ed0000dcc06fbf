//! # saral-core: Pure Billing Logic for Saral POS
//!
//! This crate is the **heart** of Saral POS. It contains all billing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Saral POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Billing Frontend                           │   │
//! │  │    Create Bill ──► Invoice View ──► History ──► Dashboard      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ saral-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   draft   │  │  totals   │  │   words   │  │  invoice  │  │   │
//! │  │   │ BillDraft │  │ discounts │  │ Indian    │  │ view      │  │   │
//! │  │   │  reducer  │  │ subtotals │  │ numbering │  │ model     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    saral-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Bill, BillStatus, PaymentMode)
//! - [`money`] - Money type with integer paise arithmetic (no floating point!)
//! - [`discount`] - Discount resolution (fixed / percentage, transaction / item scope)
//! - [`totals`] - Bill totals aggregation
//! - [`words`] - Indian-system number-to-words formatter
//! - [`draft`] - In-progress bill state and its event reducer
//! - [`assemble`] - Draft to persistable payload assembly
//! - [`invoice`] - Print-ready invoice view model
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use saral_core::discount::{Discount, DiscountPolicy};
//! use saral_core::money::Money;
//! use saral_core::totals::BillTotals;
//! use saral_core::types::LineItem;
//!
//! let items = vec![
//!     LineItem::new("Silk Saree", Money::from_rupees(500, 0), 2),
//!     LineItem::new("Cotton Blouse", Money::from_rupees(300, 0), 1),
//! ];
//! let policy = DiscountPolicy::Transaction(Discount::Percentage(1000)); // 10%
//!
//! let totals = BillTotals::compute(&items, &policy);
//! assert_eq!(totals.subtotal, Money::from_rupees(1300, 0));
//! assert_eq!(totals.discount, Money::from_rupees(130, 0));
//! assert_eq!(totals.total, Money::from_rupees(1170, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assemble;
pub mod discount;
pub mod draft;
pub mod error;
pub mod invoice;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use saral_core::Money` instead of
// `use saral_core::money::Money`

pub use discount::{Discount, DiscountKind, DiscountPolicy, DiscountScope};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::BillTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single bill
///
/// ## Business Reason
/// Prevents runaway drafts and keeps single-page invoices printable.
/// Can be made configurable per-store in future versions.
pub const MAX_BILL_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
/// Configurable per-store in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
