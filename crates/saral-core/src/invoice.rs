//! # Invoice View Model
//!
//! Projects a stored bill into a print-ready invoice structure.
//!
//! ## Rules
//! - The invoice number is the store-assigned bill id, zero-padded to
//!   six digits: bill 42 prints as `#000042`.
//! - The gross subtotal is recomputed as `Σ price × quantity` over the
//!   stored lines; the stored `item_total` values are not trusted for it.
//! - The total discount shown is `gross_subtotal - total_amount`, which
//!   folds bill-level and per-item discounts into one figure.
//! - The discount column renders only when at least one line carries a
//!   non-zero discount.
//! - The amount in words uses the rounded whole-rupee total; negative
//!   totals suppress the words line rather than spelling a sign.

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Bill;
use crate::words::rupees_in_words;

/// One printable invoice row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    /// 1-based position on the invoice.
    pub serial: usize,
    pub item_name: String,
    pub price: Money,
    pub quantity: i64,
    pub discount: Money,
    pub item_total: Money,
}

/// Everything the invoice template needs, precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceView {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: chrono::NaiveDateTime,
    pub lines: Vec<InvoiceLine>,
    pub gross_subtotal: Money,
    pub total_discount: Money,
    pub total_amount: Money,
    pub show_discount_column: bool,
    /// `None` when the total is negative.
    pub amount_in_words: Option<String>,
    pub status: crate::types::BillStatus,
    pub payment_mode: Option<crate::types::PaymentMode>,
}

impl InvoiceView {
    /// Builds the view model from a stored bill.
    ///
    /// Fails only when the rounded total exceeds the number-to-words
    /// ceiling ([`crate::words::WORDS_LIMIT`] rupees).
    pub fn from_bill(bill: &Bill) -> CoreResult<InvoiceView> {
        let gross_subtotal: Money = bill
            .items
            .iter()
            .map(|item| item.price * item.quantity)
            .sum();
        let total_discount = gross_subtotal - bill.total_amount;
        let show_discount_column = bill.items.iter().any(|item| !item.discount.is_zero());

        let lines = bill
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| InvoiceLine {
                serial: index + 1,
                item_name: item.item_name.clone(),
                price: item.price,
                quantity: item.quantity,
                discount: item.discount,
                item_total: item.item_total,
            })
            .collect();

        let amount_in_words = if bill.total_amount.is_negative() {
            None
        } else {
            Some(rupees_in_words(bill.total_amount.to_whole_rupees() as u64)?)
        };

        Ok(InvoiceView {
            invoice_number: format!("#{:06}", bill.id),
            customer_name: bill.customer_name.clone(),
            customer_phone: bill.customer_phone.clone(),
            date: bill.date,
            lines,
            gross_subtotal,
            total_discount,
            total_amount: bill.total_amount,
            show_discount_column,
            amount_in_words,
            status: bill.status,
            payment_mode: bill.payment_mode,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
