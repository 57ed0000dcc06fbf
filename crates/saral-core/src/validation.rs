//! # Validation Module
//!
//! Required-field validation for bill drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Form (host UI)                                            │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - the precondition of assembly                │
//! │  ├── Required fields (name, phone, ≥1 item)                         │
//! │  └── Numeric rules (price ≥ 0, quantity ≥ 1)                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store (SQLite)                                            │
//! │  └── NOT NULL / foreign key constraints                             │
//! │                                                                     │
//! │  The assembler itself performs NO validation; a draft reaches it    │
//! │  only after `validate_draft` passes.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::draft::BillDraft;
use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_BILL_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a customer phone number.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 20 characters
/// - Digits with an optional leading `+`; spaces and hyphens allowed
pub fn validate_customer_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_phone".to_string(),
        });
    }

    if phone.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "customer_phone".to_string(),
            max: 20,
        });
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if !digits
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "customer_phone".to_string(),
            reason: "must contain only digits, spaces, hyphens, and an optional leading +"
                .to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates a whole draft as the precondition of assembly.
///
/// ## Rules
/// - Customer name and phone present and well-formed
/// - At least one item, at most `MAX_BILL_ITEMS`
/// - Every item: non-empty name, price ≥ 0, 1 ≤ quantity ≤ `MAX_ITEM_QUANTITY`
///
/// Numeric fields are checked on their resolved (parse-or-default) form,
/// so `"abc"` as a quantity fails here as 0, not as a parse error.
pub fn validate_draft(draft: &BillDraft) -> ValidationResult<()> {
    validate_customer_name(&draft.customer_name)?;
    validate_customer_phone(&draft.customer_phone)?;

    if draft.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    if draft.items.len() > MAX_BILL_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_BILL_ITEMS as i64,
        });
    }

    for item in draft.line_items() {
        if item.name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "item_name".to_string(),
            });
        }

        if item.unit_price.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        if item.quantity < 1 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if item.quantity > MAX_ITEM_QUANTITY {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ITEM_QUANTITY,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftEvent;
    use chrono::NaiveDate;

    fn valid_draft() -> BillDraft {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        BillDraft::new(date)
            .apply(DraftEvent::CustomerName("Asha".to_string()))
            .apply(DraftEvent::CustomerPhone("+91 96119 61979".to_string()))
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
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_customer_name() {
        assert!(validate_customer_name("Asha").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_customer_phone() {
        assert!(validate_customer_phone("9611961979").is_ok());
        assert!(validate_customer_phone("+91 96119-61979").is_ok());
        assert!(validate_customer_phone("").is_err());
        assert!(validate_customer_phone("phone").is_err());
    }

    #[test]
    fn test_missing_customer_blocks() {
        let draft = valid_draft().apply(DraftEvent::CustomerName(String::new()));
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_empty_item_name_blocks() {
        let draft = valid_draft().apply(DraftEvent::ItemName {
            index: 0,
            name: "  ".to_string(),
        });
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_unparseable_quantity_blocks_as_zero() {
        let draft = valid_draft().apply(DraftEvent::ItemQuantity {
            index: 0,
            raw: "many".to_string(),
        });
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_negative_price_blocks() {
        let draft = valid_draft().apply(DraftEvent::ItemPrice {
            index: 0,
            raw: "-500".to_string(),
        });
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let draft = valid_draft().apply(DraftEvent::ItemPrice {
            index: 0,
            raw: "0".to_string(),
        });
        assert!(validate_draft(&draft).is_ok());
    }
}
