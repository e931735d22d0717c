//! Fixed-point money arithmetic
//!
//! All pricing math runs on integer minor units (two decimal places) so that
//! the sequential surcharge layers compound without floating-point drift.
//! The type is currency-agnostic; formatting and currency symbols belong to
//! the presentation layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount in fixed-point minor units (1/100 of a major unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from whole major units (e.g. rupees, dollars).
    #[inline]
    #[must_use]
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    /// Amount from minor units (e.g. paise, cents).
    #[inline]
    #[must_use]
    pub const fn from_minor(units: i64) -> Self {
        Money(units)
    }

    #[inline]
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Whole major units, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn major(self) -> i64 {
        self.0 / 100
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `pct` percent of this amount, truncated toward zero.
    ///
    /// Truncation keeps the result exact for the percentage tables used in
    /// pricing (multiples of 1%), and never rounds a charge upward.
    #[inline]
    #[must_use]
    pub const fn percent(self, pct: u32) -> Money {
        Money(self.0 * pct as i64 / 100)
    }

    /// Multiply by a unit count.
    #[inline]
    #[must_use]
    pub const fn times(self, quantity: u32) -> Money {
        Money(self.0 * quantity as i64)
    }

    /// How many whole `unit` amounts fit into this amount.
    ///
    /// Returns 0 when `unit` is zero. Used to derive service hours from a
    /// cost pool and an hourly rate.
    #[inline]
    #[must_use]
    pub const fn whole_units_of(self, unit: Money) -> i64 {
        if unit.0 == 0 {
            0
        } else {
            self.0 / unit.0
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// Serialized as a decimal number of major units so catalog files read
// naturally ("base_price": 2500000). Parsing rounds to the nearest minor
// unit; all subsequent arithmetic is integer-exact.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("money value must be finite"));
        }
        Ok(Money((value * 100.0).round() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_exact() {
        let subtotal = Money::from_major(540_000);
        assert_eq!(subtotal.percent(25), Money::from_major(135_000));
        assert_eq!(subtotal.percent(0), Money::ZERO);
        assert_eq!(subtotal.percent(100), subtotal);
    }

    #[test]
    fn test_compounded_layers_have_no_drift() {
        // 18% of (540000 + 135000) must be exactly 121500.
        let base = Money::from_major(540_000) + Money::from_major(135_000);
        assert_eq!(base.percent(18), Money::from_major(121_500));
    }

    #[test]
    fn test_whole_units_truncates() {
        let pool = Money::from_major(135_000);
        let rate = Money::from_major(25_000);
        assert_eq!(pool.whole_units_of(rate), 5); // 5.4 hours -> 5
        assert_eq!(pool.whole_units_of(Money::ZERO), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(123_456).to_string(), "1234.56");
        assert_eq!(Money::from_minor(-50).to_string(), "-0.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price: Money = serde_json::from_str("2500000").unwrap();
        assert_eq!(price, Money::from_major(2_500_000));

        let fractional: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(fractional, Money::from_minor(9_999));

        let json = serde_json::to_string(&fractional).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fractional);
    }
}
