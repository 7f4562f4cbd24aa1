//! Relative change with NaN and signed-infinity outcomes

use std::fmt;

use bigdecimal::BigDecimal;
use num_traits::{Signed, Zero};
use serde::{Serialize, Serializer};

use super::numeric::plain_string;

/// Relative change between two values
///
/// Division by a zero baseline does not fail: it yields [`Change::NaN`] when
/// both values are zero and a signed infinity otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Change {
    Finite(BigDecimal),
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

impl Change {
    /// Compute `difference / |other|` with the zero-baseline rules applied
    ///
    /// Non-terminating quotients carry 100 significant digits.
    pub fn between(difference: &BigDecimal, other: &BigDecimal) -> Self {
        if other.is_zero() {
            return if difference.is_zero() {
                Change::NaN
            } else if difference.is_negative() {
                Change::NegativeInfinity
            } else {
                Change::PositiveInfinity
            };
        }

        Change::Finite((difference / &other.abs()).normalized())
    }

    /// Multiply a finite change, passing NaN and infinities through
    pub fn scale(&self, factor: &BigDecimal) -> Self {
        match self {
            Change::Finite(d) => Change::Finite((d * factor).normalized()),
            other => other.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Change::Finite(d) => Change::Finite(d.abs()),
            Change::NegativeInfinity => Change::PositiveInfinity,
            other => other.clone(),
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Change::NaN)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Change::PositiveInfinity | Change::NegativeInfinity)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Change::Finite(_))
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Change::Finite(d) => d.is_positive(),
            Change::PositiveInfinity => true,
            _ => false,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Change::Finite(d) => d.is_negative(),
            Change::NegativeInfinity => true,
            _ => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Change::Finite(d) if d.is_zero())
    }

    /// The finite value, if any
    pub fn as_finite(&self) -> Option<&BigDecimal> {
        match self {
            Change::Finite(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Finite(d) => f.write_str(&plain_string(d)),
            Change::PositiveInfinity => f.write_str("Infinity"),
            Change::NegativeInfinity => f.write_str("-Infinity"),
            Change::NaN => f.write_str("NaN"),
        }
    }
}

impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
