//! # Money Type
//!
//! Integer-based money arithmetic for the Maison shop.
//!
//! ## Why Integers?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Floating Point Money = Bugs                          │
//! │                                                                         │
//! │  0.1 + 0.2 == 0.30000000000000004   ← unacceptable on an order total    │
//! │                                                                         │
//! │  Instead, all amounts are i64 cents:                                    │
//! │  $10.99  →  1099                                                        │
//! │  $0.01   →  1                                                           │
//! │                                                                         │
//! │  Addition, multiplication by quantity, and comparison are exact.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices cross the wire as raw `*_cents` fields; `Money` is the arithmetic
//! and display wrapper used inside calculations.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// An amount of money in cents (smallest currency unit).
///
/// ## Construction
/// Always construct from cents, never from floats:
/// ```rust
/// use maison_core::Money;
///
/// let price = Money::from_cents(1099); // $10.99
/// assert_eq!(price.cents(), 1099);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Returns the raw cent amount.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a quantity (line total calculation).
    ///
    /// ## Example
    /// ```rust
    /// use maison_core::Money;
    ///
    /// let unit = Money::from_cents(2500);
    /// assert_eq!(unit.times(3).cents(), 7500);
    /// ```
    #[inline]
    pub const fn times(&self, quantity: i64) -> Self {
        Money(self.0 * quantity)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Formats as a dollar amount for receipts and logs: `$12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_round_trip() {
        let m = Money::from_cents(1099);
        assert_eq!(m.cents(), 1099);
        assert!(!m.is_zero());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_addition_and_sum() {
        let total: Money = [100, 250, 49].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total, Money::from_cents(399));
        assert_eq!(
            Money::from_cents(1) + Money::from_cents(2),
            Money::from_cents(3)
        );
    }

    #[test]
    fn test_times_quantity() {
        assert_eq!(Money::from_cents(999).times(2).cents(), 1998);
        assert_eq!(Money::from_cents(999).times(0).cents(), 0);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }
}
