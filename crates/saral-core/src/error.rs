//! # Error Types
//!
//! Domain-specific error types for saral-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  saral-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  saral-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → host surface         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, amount, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core billing logic errors.
///
/// These represent business rule violations or domain logic failures and
/// should be translated to user-facing messages by the host.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Amount is too large for the amount-in-words renderer.
    ///
    /// The Indian grouping renderer covers up to nine digits
    /// (99,99,99,999 = just under 100 crore). Anything larger must be
    /// rejected rather than silently truncated.
    #[error("amount {amount} is out of range for words rendering (max 99,99,99,999)")]
    AmountOutOfRange { amount: u64 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a bill draft doesn't meet requirements. Validation is
/// a precondition of assembly: a draft that fails here never reaches the
/// assembler or the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A bill needs at least one line item.
    #[error("bill must contain at least one item")]
    NoItems,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::AmountOutOfRange {
            amount: 1_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "amount 1000000000 is out of range for words rendering (max 99,99,99,999)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer_name".to_string(),
        };
        assert_eq!(err.to_string(), "customer_name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NoItems;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
