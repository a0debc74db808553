//! Fixed-point transaction amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts wrap `rust_decimal::Decimal` and persist as integer minor units.

use std::ops::{Add, Neg, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Signed monetary amount of a ledger transaction.
///
/// Persisted as hundredths (`MINOR_UNIT_SCALE` fractional digits).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of fractional digits kept in storage.
    pub const MINOR_UNIT_SCALE: u32 = 2;

    /// Creates an amount from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from stored minor units (e.g., cents).
    #[must_use]
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::new(units, Self::MINOR_UNIT_SCALE))
    }

    /// Converts the amount to minor units.
    ///
    /// Returns `None` if the amount carries more fractional digits than
    /// `MINOR_UNIT_SCALE` or does not fit in an `i64`.
    #[must_use]
    pub fn to_minor_units(&self) -> Option<i64> {
        if self.0.normalize().scale() > Self::MINOR_UNIT_SCALE {
            return None;
        }
        self.0.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_minor_units_round_trip() {
        let amount = Amount::new(dec!(1234.56));
        assert_eq!(amount.to_minor_units(), Some(123_456));
        assert_eq!(Amount::from_minor_units(123_456), amount);
    }

    #[test]
    fn test_minor_units_accept_trailing_zeros() {
        assert_eq!(Amount::new(dec!(10.500)).to_minor_units(), Some(1050));
        assert_eq!(Amount::new(dec!(-3)).to_minor_units(), Some(-300));
    }

    #[test]
    fn test_minor_units_reject_sub_cent_precision() {
        assert_eq!(Amount::new(dec!(0.001)).to_minor_units(), None);
        assert_eq!(Amount::new(dec!(19.999)).to_minor_units(), None);
    }

    #[test]
    fn test_minor_units_reject_overflow() {
        assert_eq!(Amount::new(Decimal::MAX).to_minor_units(), None);
    }

    #[test]
    fn test_sign_helpers() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_negative());
        assert!(Amount::new(dec!(-0.01)).is_negative());
        assert!(!Amount::new(dec!(0.01)).is_negative());
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(dec!(100.10));
        let b = Amount::new(dec!(0.20));
        assert_eq!(a + b, Amount::new(dec!(100.30)));
        assert_eq!(a - b, Amount::new(dec!(99.90)));
        assert_eq!(-a, Amount::new(dec!(-100.10)));
        assert_eq!([a, b, -b].into_iter().sum::<Amount>(), a);
    }

    #[test]
    fn test_parse_and_display() {
        let amount = Amount::from_str("1000.00").unwrap();
        assert_eq!(amount.to_string(), "1000.00");
        assert!(Amount::from_str("abc").is_err());
    }
}
