//! Exact comparison of two numbers

mod change;
mod numeric;

use bigdecimal::BigDecimal;
use num_traits::{Signed, Zero};

use crate::error::Result;

pub use change::Change;
pub use numeric::{parse_decimal, plain_string, Numeric, MAX_EXPONENT};

/// Compares `value` against a baseline `other`
///
/// Both inputs are held as exact decimals of any size. The difference, the
/// relative change and the percentage are computed once at construction, so
/// a comparator can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    value: BigDecimal,
    other: BigDecimal,
    difference: BigDecimal,
    change: Change,
    percentage: Change,
}

impl Comparator {
    /// Create a comparator from any numeric-like inputs
    pub fn new(value: impl Numeric, other: impl Numeric) -> Result<Self> {
        Ok(Self::from_decimals(value.to_decimal()?, other.to_decimal()?))
    }

    /// Create a comparator from decimals that are already exact
    pub fn from_decimals(value: BigDecimal, other: BigDecimal) -> Self {
        let difference = &value - &other;
        let change = Change::between(&difference, &other);
        let percentage = change.scale(&BigDecimal::from(100_i64));

        Self {
            value,
            other,
            difference,
            change,
            percentage,
        }
    }

    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    pub fn other(&self) -> &BigDecimal {
        &self.other
    }

    /// `value - other`
    pub fn difference(&self) -> &BigDecimal {
        &self.difference
    }

    /// `difference / |other|`, or NaN / signed infinity for a zero baseline
    pub fn change(&self) -> &Change {
        &self.change
    }

    /// `change * 100`
    pub fn percentage(&self) -> &Change {
        &self.percentage
    }

    pub fn is_positive(&self) -> bool {
        self.difference.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.difference.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.difference.is_zero()
    }

    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_infinite(&self) -> bool {
        self.change.is_infinite()
    }

    pub fn is_nan(&self) -> bool {
        self.change.is_nan()
    }
}

impl AsRef<Comparator> for Comparator {
    fn as_ref(&self) -> &Comparator {
        self
    }
}
