//! # Amount in Words
//!
//! Renders a whole-rupee amount in English words using the Indian
//! numbering grouping (crore / lakh / thousand / hundred).
//!
//! ## The Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Indian grouping of a 9-digit amount                                │
//! │                                                                     │
//! │   9 8 7 6 5 4 3 2 1                                                 │
//! │   └┬┘ └┬┘ └┬┘ │ └┬┘                                                 │
//! │  crore lakh thousand                                                │
//! │    ×10^7 ×10^5 ×10^3 │  tens + units                                │
//! │                  hundred ×10^2                                      │
//! │                                                                     │
//! │  98,76,54,321 → "Ninety Eight Crore Seventy Six Lakh Fifty Four     │
//! │                  Thousand Three Hundred and Twenty One"             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The final tens-units group is joined with "and" only when an earlier
//! group was non-zero. Zero renders as the empty string. Amounts of 100
//! crore and above are out of range and rejected, never truncated.

use crate::error::{CoreError, CoreResult};

/// Smallest amount the renderer cannot express (100 crore).
pub const WORDS_LIMIT: u64 = 1_000_000_000;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Renders a two-digit group (0-99). Zero renders as "".
fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// Converts a whole-rupee amount to English words, Indian grouping.
///
/// ## Examples
/// ```rust
/// use saral_core::words::rupees_in_words;
///
/// assert_eq!(rupees_in_words(0).unwrap(), "");
/// assert_eq!(rupees_in_words(1170).unwrap(), "One Thousand One Hundred and Seventy");
/// assert_eq!(
///     rupees_in_words(123456).unwrap(),
///     "One Lakh Twenty Three Thousand Four Hundred and Fifty Six"
/// );
/// ```
///
/// ## Errors
/// `CoreError::AmountOutOfRange` for amounts of 100 crore (10^9) and
/// above; more than nine digits cannot be grouped.
pub fn rupees_in_words(amount: u64) -> CoreResult<String> {
    if amount >= WORDS_LIMIT {
        return Err(CoreError::AmountOutOfRange { amount });
    }

    // Fixed-width split of the zero-padded amount:
    // [crore 2][lakh 2][thousand 2][hundred 1][tens-units 2]
    let crore = amount / 10_000_000;
    let lakh = (amount / 100_000) % 100;
    let thousand = (amount / 1_000) % 100;
    let hundred = (amount / 100) % 10;
    let tens_units = amount % 100;

    let mut parts: Vec<String> = Vec::new();
    for (group, unit) in [
        (crore, "Crore"),
        (lakh, "Lakh"),
        (thousand, "Thousand"),
        (hundred, "Hundred"),
    ] {
        if group > 0 {
            parts.push(format!("{} {}", two_digits(group), unit));
        }
    }

    if tens_units > 0 {
        if parts.is_empty() {
            parts.push(two_digits(tens_units));
        } else {
            parts.push(format!("and {}", two_digits(tens_units)));
        }
    }

    Ok(parts.join(" "))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(rupees_in_words(0).unwrap(), "");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(rupees_in_words(1).unwrap(), "One");
        assert_eq!(rupees_in_words(100).unwrap(), "One Hundred");
        assert_eq!(rupees_in_words(1_000).unwrap(), "One Thousand");
        assert_eq!(rupees_in_words(100_000).unwrap(), "One Lakh");
        assert_eq!(rupees_in_words(10_000_000).unwrap(), "One Crore");
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(rupees_in_words(14).unwrap(), "Fourteen");
        assert_eq!(rupees_in_words(20).unwrap(), "Twenty");
        assert_eq!(rupees_in_words(42).unwrap(), "Forty Two");
        assert_eq!(rupees_in_words(99).unwrap(), "Ninety Nine");
    }

    #[test]
    fn test_and_joins_final_group_only_after_larger_groups() {
        assert_eq!(
            rupees_in_words(123456).unwrap(),
            "One Lakh Twenty Three Thousand Four Hundred and Fifty Six"
        );
        assert_eq!(
            rupees_in_words(1170).unwrap(),
            "One Thousand One Hundred and Seventy"
        );
        // No preceding group: no "and"
        assert_eq!(rupees_in_words(56).unwrap(), "Fifty Six");
    }

    #[test]
    fn test_skips_zero_groups() {
        assert_eq!(rupees_in_words(100_001).unwrap(), "One Lakh and One");
        assert_eq!(
            rupees_in_words(10_000_500).unwrap(),
            "One Crore Five Hundred"
        );
    }

    #[test]
    fn test_largest_representable() {
        assert_eq!(
            rupees_in_words(999_999_999).unwrap(),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine"
        );
    }

    #[test]
    fn test_overflow_is_rejected_not_truncated() {
        assert!(matches!(
            rupees_in_words(WORDS_LIMIT),
            Err(CoreError::AmountOutOfRange { .. })
        ));
        assert!(matches!(
            rupees_in_words(12_345_678_901),
            Err(CoreError::AmountOutOfRange { .. })
        ));
    }
}
