//! Money value object (integer minor units, never floats).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percentage;

/// A non-negative monetary amount in minor units (paise).
///
/// All arithmetic stays in integer minor units; rounding happens once,
/// half-up, at the point a fractional result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a Money from minor units, clamping negatives to zero.
    pub fn from_minor(minor: i64) -> Self {
        Self(minor.max(0))
    }

    /// Creates a Money from whole currency units.
    pub fn from_major(major: i64) -> Self {
        Self((major.max(0)).saturating_mul(100))
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts.
    pub fn add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts, flooring at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Returns the smaller of the two amounts.
    pub fn min(&self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Computes a percentage of this amount, rounded half-up to the minor unit.
    pub fn percent_of(&self, pct: Percentage) -> Money {
        let raw = self.0 as i128 * pct.value() as i128;
        Money(((raw + 50) / 100) as i64)
    }

    /// Splits this amount evenly over `parts` and scales by `count`,
    /// rounded half-up. Used for time-based proration: the amount for
    /// `count` days out of a `parts`-day period.
    pub fn prorate(&self, count: u32, parts: u32) -> Money {
        if parts == 0 {
            return Money::ZERO;
        }
        let raw = self.0 as i128 * count as i128;
        let parts = parts as i128;
        Money(((raw + parts / 2) / parts) as i64)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc.add(m))
    }
}
