//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paise                                        │
//! │    ₹10.00 is stored as 1000 paise (i64)                             │
//! │    All arithmetic is exact; rounding happens only at defined        │
//! │    points (percentage discounts, whole-rupee words rendering)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The bill store exchanges rupee amounts as plain decimal numbers
//! (`500.0`, `1170.5`), so `Money` serializes to a JSON number of rupees
//! and deserializes by rounding back to paise. Floats exist only at this
//! boundary; every calculation stays in integer paise.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: a misconfigured transaction discount can legally
///   drive a grand total negative, and the negative value is preserved
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    ///
    /// let price = Money::from_paise(50000); // ₹500.00
    /// assert_eq!(price.paise(), 50000);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// For negative amounts, only the rupee part should be negative:
    /// `from_rupees(-5, 50)` is -₹5.50, not -₹4.50.
    #[inline]
    pub const fn from_rupees(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Caps the value at zero from below: `max(0, self)`.
    ///
    /// Used for per-item line totals, which are clamped; the bill-level
    /// grand total is NOT passed through this.
    #[inline]
    pub const fn clamp_at_zero(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(50000); // ₹500.00
    /// assert_eq!(unit_price.multiply_quantity(2).paise(), 100000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Rounds to the nearest whole rupee (half away from zero).
    ///
    /// The amount-in-words renderer works on whole rupees; the fractional
    /// part of a grand total is dropped by rounding before conversion.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(117050).to_whole_rupees(), 1171);
    /// assert_eq!(Money::from_paise(117049).to_whole_rupees(), 1170);
    /// assert_eq!(Money::from_paise(-550).to_whole_rupees(), -6);
    /// ```
    pub const fn to_whole_rupees(&self) -> i64 {
        let rounded = (self.0.abs() + 50) / 100;
        if self.0 < 0 {
            -rounded
        } else {
            rounded
        }
    }

    /// Parses a rupee amount from raw text input (`"500"`, `"499.99"`).
    ///
    /// Returns `None` for anything that isn't a finite decimal number.
    /// The fraction is rounded to paise. See `draft::parse_rupees_or_zero`
    /// for the parse-or-default policy applied to form input.
    pub fn parse_rupees(raw: &str) -> Option<Money> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Money((value * 100.0).round() as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// For debugging and invoice text; `Rs 1170.00` style.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs {}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Wire Serialization
// =============================================================================
// The store's payloads carry rupee amounts as decimal JSON numbers, so
// Money crosses the wire as rupees and is rounded back to paise on the
// way in.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        if !rupees.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        Ok(Money((rupees * 100.0).round() as i64))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(117050);
        assert_eq!(money.paise(), 117050);
        assert_eq!(money.rupees(), 1170);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(500, 0).paise(), 50000);
        assert_eq!(Money::from_rupees(-5, 50).paise(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(117000)), "Rs 1170.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-Rs 5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "Rs 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_clamp_at_zero() {
        assert_eq!(Money::from_paise(-100).clamp_at_zero().paise(), 0);
        assert_eq!(Money::from_paise(100).clamp_at_zero().paise(), 100);
    }

    #[test]
    fn test_to_whole_rupees() {
        assert_eq!(Money::from_paise(117050).to_whole_rupees(), 1171);
        assert_eq!(Money::from_paise(117049).to_whole_rupees(), 1170);
        assert_eq!(Money::from_paise(50).to_whole_rupees(), 1);
        assert_eq!(Money::from_paise(49).to_whole_rupees(), 0);
        assert_eq!(Money::from_paise(-550).to_whole_rupees(), -6);
    }

    #[test]
    fn test_parse_rupees() {
        assert_eq!(Money::parse_rupees("500").unwrap().paise(), 50000);
        assert_eq!(Money::parse_rupees("499.99").unwrap().paise(), 49999);
        assert_eq!(Money::parse_rupees(" 12.5 ").unwrap().paise(), 1250);
        assert!(Money::parse_rupees("").is_none());
        assert!(Money::parse_rupees("abc").is_none());
        assert!(Money::parse_rupees("NaN").is_none());
    }

    #[test]
    fn test_wire_round_trip() {
        let money = Money::from_paise(117050);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "1170.5");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);

        // Whole amounts come back from integer JSON numbers too
        let whole: Money = serde_json::from_str("500").unwrap();
        assert_eq!(whole.paise(), 50000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|p| Money::from_paise(*p)).sum();
        assert_eq!(total.paise(), 600);
    }
}
