//! # Domain Types
//!
//! Core domain types for Saral POS billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │   LineItem    │   │    NewBill     │   │      Bill      │       │
//! │  │  ───────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  name         │   │  customer_*    │   │  id (store)    │       │
//! │  │  unit_price   │──►│  items[]       │──►│  items[]       │       │
//! │  │  quantity     │   │  totals        │   │  totals        │       │
//! │  │  discount     │   │  (payload)     │   │  (persisted)   │       │
//! │  └───────────────┘   └────────────────┘   └────────────────┘       │
//! │                                                                     │
//! │  ┌───────────────┐   ┌────────────────┐                            │
//! │  │  BillStatus   │   │  PaymentMode   │                            │
//! │  │  Paid/Unpaid  │   │ Cash/UPI/Card/ │                            │
//! │  └───────────────┘   │     Credit     │                            │
//! │                      └────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `LineItem` is the in-progress, resolved form of one bill row; the
//! persisted `BillItem` is a snapshot with the discount already resolved
//! to a money amount. Bill timestamps are `NaiveDateTime`: local
//! wall-clock, never UTC-shifted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::discount::Discount;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One priced product entry within an in-progress bill.
///
/// The line total is always derived from `unit_price`, `quantity` and
/// (under Item scope only) `discount`; it is never stored or mutated
/// independently. See [`crate::totals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Display name shown on the invoice.
    pub name: String,

    /// Unit price (non-negative for valid input).
    pub unit_price: Money,

    /// Quantity sold (positive for valid input).
    pub quantity: i64,

    /// Per-item discount; meaningful only under Item scope.
    pub discount: Discount,
}

impl LineItem {
    /// Creates a line item with no discount.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
            discount: Discount::none(),
        }
    }

    /// Raw pre-discount amount: unit price × quantity.
    #[inline]
    pub fn gross(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Bill Status
// =============================================================================

/// Payment status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    /// Settled at creation time; `payment_mode` is present.
    Paid,
    /// Outstanding; `payment_mode` is absent.
    Unpaid,
}

impl BillStatus {
    /// Stable text form, as stored and sent on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Paid => "Paid",
            BillStatus::Unpaid => "Unpaid",
        }
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Unpaid
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(BillStatus::Paid),
            "Unpaid" => Ok(BillStatus::Unpaid),
            other => Err(format!("unknown bill status: {other}")),
        }
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How a paid bill was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Card,
    /// Udhaar (informal store credit).
    Credit,
}

impl PaymentMode {
    /// Stable text form, as stored and sent on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::Credit => "Credit",
        }
    }
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Cash
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMode::Cash),
            "UPI" => Ok(PaymentMode::Upi),
            "Card" => Ok(PaymentMode::Card),
            "Credit" => Ok(PaymentMode::Credit),
            other => Err(format!("unknown payment mode: {other}")),
        }
    }
}

// =============================================================================
// New Bill (creation payload)
// =============================================================================

/// One item row in a bill creation payload.
///
/// The discount is already resolved to a money amount: the per-item
/// amount under Item scope, zero under Transaction scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBillItem {
    pub item_name: String,
    pub price: Money,
    pub quantity: i64,
    /// Resolved per-item discount amount (zero under Transaction scope).
    #[serde(default)]
    pub discount: Money,
    pub item_total: Money,
}

/// The persistable bill payload produced by the assembler.
///
/// Field names and shapes match the store contract (`POST /bills/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBill {
    pub customer_name: String,
    pub customer_phone: String,
    /// Local wall-clock timestamp, no UTC offset.
    pub date: NaiveDateTime,
    pub total_amount: Money,
    /// Resolved bill-level discount amount (zero under Item scope).
    #[serde(default)]
    pub discount: Money,
    pub status: BillStatus,
    pub payment_mode: Option<PaymentMode>,
    pub items: Vec<NewBillItem>,
}

// =============================================================================
// Bill (persisted)
// =============================================================================

/// A persisted item row, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub id: i64,
    pub bill_id: i64,
    pub item_name: String,
    pub price: Money,
    pub quantity: i64,
    #[serde(default)]
    pub discount: Money,
    pub item_total: Money,
}

/// A persisted sales transaction record.
///
/// Created once, read-only afterwards; deleted only via bulk retention
/// cleanup on the store side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: NaiveDateTime,
    pub total_amount: Money,
    #[serde(default)]
    pub discount: Money,
    pub status: BillStatus,
    pub payment_mode: Option<PaymentMode>,
    pub items: Vec<BillItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================
