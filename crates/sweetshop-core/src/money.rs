//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Precision Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED vs DISPLAYED                                                    │
//! │                                                                         │
//! │  Stored:     unit prices and totals keep full precision                │
//! │              0.125 × 3 = 0.375 (kept as-is)                            │
//! │                                                                         │
//! │  Displayed:  rounded to 2 decimals, half away from zero                │
//! │              0.375 → "$0.38"                                            │
//! │                                                                         │
//! │  Only the textual rendering (and the display row's line total) is      │
//! │  rounded. Sums are always taken over the unrounded amounts.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sweetshop_core::money::Money;
//!
//! let price = Money::try_new(10.0).unwrap();
//! let line_total = price * 3;
//! assert_eq!(line_total.formatted(), "$30.00");
//!
//! assert!(Money::try_new(-1.0).is_err());
//! assert!(Money::try_new(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{validate_unit_price, ValidationResult};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary amount in major currency units.
///
/// ## Design Decisions
/// - **f64**: Catalog prices arrive as decimals and must not be truncated
///   before they are multiplied and summed.
/// - **Validated construction**: `try_new` is the only public way in, so a
///   stored `Money` is always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value, rejecting NaN, infinities and negatives.
    ///
    /// ## Example
    /// ```rust
    /// use sweetshop_core::money::Money;
    ///
    /// assert_eq!(Money::try_new(2.5).unwrap().amount(), 2.5);
    /// assert!(Money::try_new(f64::INFINITY).is_err());
    /// ```
    pub fn try_new(amount: f64) -> ValidationResult<Self> {
        validate_unit_price(amount)?;
        Ok(Money(amount))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Returns the full-precision amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the amount rounded to two decimals, half away from zero.
    ///
    /// Used for display rows only; totals are never summed from rounded
    /// values.
    ///
    /// ## Example
    /// ```rust
    /// use sweetshop_core::money::Money;
    ///
    /// assert_eq!(Money::try_new(0.125).unwrap().rounded().amount(), 0.13);
    /// assert_eq!(Money::try_new(10.0).unwrap().rounded().amount(), 10.0);
    /// ```
    #[inline]
    pub fn rounded(&self) -> Self {
        // f64::round ties away from zero
        Money((self.0 * 100.0).round() / 100.0)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use sweetshop_core::money::Money;
    ///
    /// let unit_price = Money::try_new(2.99).unwrap();
    /// assert_eq!(unit_price.multiply_quantity(3).formatted(), "$8.97");
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * f64::from(qty))
    }

    /// Renders the amount as `$D.CC`.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded().0)
    }
}

/// Deserialization goes through the same checks as `try_new`.
impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::try_new(amount)
    }
}

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

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(amount: f64) -> Money {
        Money::try_new(amount).unwrap()
    }

    #[test]
    fn test_try_new_rejects_invalid_amounts() {
        assert!(Money::try_new(0.0).is_ok());
        assert!(Money::try_new(12.5).is_ok());
        assert!(Money::try_new(-0.01).is_err());
        assert!(Money::try_new(f64::NAN).is_err());
        assert!(Money::try_new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(money(10.99).to_string(), "$10.99");
        assert_eq!(money(5.0).to_string(), "$5.00");
        assert_eq!(money(0.0).to_string(), "$0.00");
        assert_eq!(money(0.5).to_string(), "$0.50");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so this is a true tie
        assert_eq!(money(0.125).to_string(), "$0.13");
        assert_eq!(money(1.004).to_string(), "$1.00");
        assert_eq!(money(1.006).to_string(), "$1.01");
    }

    #[test]
    fn test_display_large_amounts() {
        assert_eq!(money(1e17).formatted(), "$100000000000000000.00");
        assert_eq!((money(5e16) * 3).formatted(), "$150000000000000000.00");
    }

    #[test]
    fn test_deserialize_validates() {
        let price: Money = serde_json::from_str("2.5").unwrap();
        assert_eq!(price.amount(), 2.5);

        assert!(serde_json::from_str::<Money>("-1.0").is_err());
    }

    #[test]
    fn test_arithmetic_keeps_full_precision() {
        let total = money(0.125) + money(0.125);
        assert_eq!(total.amount(), 0.25);

        let mut acc = Money::zero();
        acc += money(1.5);
        acc += money(2.25);
        assert_eq!(acc.amount(), 3.75);

        let line: Money = money(0.125) * 3;
        assert_eq!(line.amount(), 0.375);
        assert_eq!(line.rounded().amount(), 0.38);
        assert_eq!(line.formatted(), "$0.38");
    }

    #[test]
    fn test_sum() {
        let total: Money = [money(1.0), money(2.5), money(0.25)].into_iter().sum();
        assert_eq!(total.amount(), 3.75);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }
}
