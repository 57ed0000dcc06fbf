//! # Bill Assembler
//!
//! Builds the persistable bill payload from a validated draft.
//!
//! ## Contract
//! Assembly trusts its input: required-field validation
//! ([`crate::validation::validate_draft`]) is a precondition enforced by
//! the caller, and the assembler performs none of it. What it does do:
//!
//! - composes the timestamp from the user-selected calendar date and the
//!   caller-supplied wall-clock time (NOT midnight, NOT UTC-shifted)
//! - resolves per-item discounts to money amounts (zero under
//!   Transaction scope)
//! - resolves the bill-level discount (zero under Item scope)
//! - carries `payment_mode` only when the bill is Paid
//!
//! Exactly one discount mechanism is active per bill; the inactive one
//! assembles as zero, so consumers never see leftover values.

use chrono::NaiveTime;

use crate::discount::{DiscountPolicy, DiscountScope};
use crate::draft::BillDraft;
use crate::money::Money;
use crate::totals::{line_total, BillTotals};
use crate::types::{BillStatus, NewBill, NewBillItem};

/// Assembles the creation payload from a draft.
///
/// `time_of_day` is the current wall-clock time at submission; pass
/// `chrono::Local::now().time()` from the host. Keeping it a parameter
/// keeps assembly deterministic and testable.
///
/// ## Example
/// ```rust
/// use chrono::{NaiveDate, NaiveTime};
/// use saral_core::assemble::assemble;
/// use saral_core::draft::{BillDraft, DraftEvent};
///
/// let draft = BillDraft::new(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())
///     .apply(DraftEvent::CustomerName("Asha".into()))
///     .apply(DraftEvent::CustomerPhone("9611961979".into()))
///     .apply(DraftEvent::ItemName { index: 0, name: "Saree".into() })
///     .apply(DraftEvent::ItemPrice { index: 0, raw: "500".into() })
///     .apply(DraftEvent::ItemQuantity { index: 0, raw: "2".into() });
///
/// let payload = assemble(&draft, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
/// assert_eq!(payload.total_amount.paise(), 100000);
/// assert_eq!(payload.date.to_string(), "2026-08-29 14:30:00");
/// ```
pub fn assemble(draft: &BillDraft, time_of_day: NaiveTime) -> NewBill {
    let items = draft.line_items();
    let policy = draft.policy();
    let scope = policy.scope();
    let totals = BillTotals::compute(&items, &policy);

    let bill_items = items
        .iter()
        .map(|item| {
            let discount = match scope {
                DiscountScope::Item => item.discount.amount(item.gross()),
                DiscountScope::Transaction => Money::zero(),
            };
            NewBillItem {
                item_name: item.name.clone(),
                price: item.unit_price,
                quantity: item.quantity,
                discount,
                item_total: line_total(item, scope),
            }
        })
        .collect();

    let bill_discount = match policy {
        DiscountPolicy::Transaction(_) => totals.discount,
        DiscountPolicy::Item => Money::zero(),
    };

    let payment_mode = match draft.status {
        BillStatus::Paid => Some(draft.payment_mode),
        BillStatus::Unpaid => None,
    };

    NewBill {
        customer_name: draft.customer_name.clone(),
        customer_phone: draft.customer_phone.clone(),
        date: draft.bill_date.and_time(time_of_day),
        total_amount: totals.total,
        discount: bill_discount,
        status: draft.status,
        payment_mode,
        items: bill_items,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
