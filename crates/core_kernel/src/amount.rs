//! Integer money amounts
//!
//! All monetary values in the system are plain integers in the smallest
//! currency unit. No floating point is used anywhere in balance or share
//! computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during amount operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Overflow during calculation")]
    Overflow,

    #[error("Cannot split an amount into zero parts")]
    ZeroParts,

    #[error("Cannot split a negative amount: {0}")]
    NegativeSplit(i64),
}

/// A signed monetary amount in the smallest currency unit
///
/// Amounts may be negative: a negative member balance represents debt.
/// All arithmetic that feeds persistent state goes through the checked
/// methods; the operator impls are conveniences for test code and panic
/// on overflow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from minor units (e.g. cents, won)
    pub fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the raw minor-unit value
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition
    pub fn checked_add(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Splits the amount into `parts` equal shares using ceiling division
    ///
    /// Every share is `ceil(self / parts)`, so the sum of the shares may
    /// exceed the original amount by up to `parts - 1` minor units. The
    /// rounding always favors the pool over the individual payer.
    ///
    /// # Errors
    ///
    /// Returns an error when `parts` is zero, when the amount is negative,
    /// or when the intermediate addition overflows.
    pub fn split_ceil(&self, parts: u32) -> Result<Amount, AmountError> {
        if parts == 0 {
            return Err(AmountError::ZeroParts);
        }
        if self.is_negative() {
            return Err(AmountError::NegativeSplit(self.0));
        }

        let divisor = i64::from(parts);
        let bumped = self
            .0
            .checked_add(divisor - 1)
            .ok_or(AmountError::Overflow)?;
        Ok(Amount(bumped / divisor))
    }

    /// Returns the debt carried by this amount: `max(0, -self)`
    ///
    /// A positive or zero balance carries no debt; a negative balance owes
    /// its absolute value.
    pub fn carried_debt(&self) -> Amount {
        if self.is_negative() {
            self.abs()
        } else {
            Amount::ZERO
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other).expect("Overflow in Amount::add")
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other).expect("Overflow in Amount::sub")
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl From<i64> for Amount {
    fn from(minor_units: i64) -> Self {
        Amount(minor_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        let a = Amount::new(100);
        let b = Amount::new(30);

        assert_eq!(a.checked_add(b).unwrap(), Amount::new(130));
        assert_eq!(a.checked_sub(b).unwrap(), Amount::new(70));
        assert_eq!(
            Amount::new(i64::MAX).checked_add(Amount::new(1)),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_split_ceil_exact() {
        let share = Amount::new(100).split_ceil(2).unwrap();
        assert_eq!(share, Amount::new(50));
    }

    #[test]
    fn test_split_ceil_rounds_up() {
        let share = Amount::new(101).split_ceil(3).unwrap();
        assert_eq!(share, Amount::new(34));
    }

    #[test]
    fn test_split_ceil_rejects_zero_parts() {
        assert_eq!(Amount::new(100).split_ceil(0), Err(AmountError::ZeroParts));
    }

    #[test]
    fn test_split_ceil_rejects_negative() {
        assert_eq!(
            Amount::new(-5).split_ceil(2),
            Err(AmountError::NegativeSplit(-5))
        );
    }

    #[test]
    fn test_carried_debt() {
        assert_eq!(Amount::new(500).carried_debt(), Amount::ZERO);
        assert_eq!(Amount::ZERO.carried_debt(), Amount::ZERO);
        assert_eq!(Amount::new(-11677).carried_debt(), Amount::new(11677));
    }
}
