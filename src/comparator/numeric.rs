//! Conversion of numeric-like inputs into exact decimals

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::error::{ComparisonError, Result};

/// Largest accepted decimal exponent, in either direction
///
/// Digit counts are unbounded; only the position of the decimal point is
/// limited so `1e999999999` cannot expand into a billion-digit integer.
pub const MAX_EXPONENT: u64 = 4096;

/// A value that can be converted into an exact [`BigDecimal`]
///
/// Floats go through their shortest round-trip text so `0.1_f64` becomes
/// exactly `0.1` instead of the binary approximation.
pub trait Numeric {
    fn to_decimal(&self) -> Result<BigDecimal>;
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_decimal(&self) -> Result<BigDecimal> {
        (**self).to_decimal()
    }
}

impl Numeric for BigDecimal {
    fn to_decimal(&self) -> Result<BigDecimal> {
        Ok(self.clone())
    }
}

impl Numeric for rust_decimal::Decimal {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse_decimal(&self.to_string())
    }
}

macro_rules! impl_numeric_for_int {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_decimal(&self) -> Result<BigDecimal> {
                    Ok(BigDecimal::new(BigInt::from(*self), 0))
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f64 {
    fn to_decimal(&self) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(ComparisonError::invalid(
                self.to_string(),
                "not a finite number",
            ));
        }
        parse_decimal(&self.to_string())
    }
}

impl Numeric for f32 {
    fn to_decimal(&self) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(ComparisonError::invalid(
                self.to_string(),
                "not a finite number",
            ));
        }
        parse_decimal(&self.to_string())
    }
}

impl Numeric for str {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

impl Numeric for String {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

/// Parse decimal text without rounding
///
/// Accepts surrounding whitespace, a single leading sign, `_` digit
/// separators and scientific notation. Every digit of the mantissa is kept.
pub fn parse_decimal(raw: &str) -> Result<BigDecimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ComparisonError::invalid(raw, "empty input"));
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if body.starts_with(['+', '-']) {
        return Err(ComparisonError::invalid(raw, "multiple signs"));
    }
    if body.starts_with('_') || body.ends_with('_') {
        return Err(ComparisonError::invalid(raw, "misplaced digit separator"));
    }
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(ComparisonError::invalid(raw, "not a number"));
    }

    let cleaned = format!("{}{}", sign, body.replace('_', ""));
    let parsed =
        BigDecimal::from_str(&cleaned).map_err(|e| ComparisonError::invalid(raw, e.to_string()))?;

    let (_, exponent) = parsed.as_bigint_and_exponent();
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(ComparisonError::invalid(raw, "exponent out of range"));
    }
    Ok(parsed)
}

/// Render a decimal in positional notation, never scientific
///
/// Keeps the value's own scale, so `25.00` stays `25.00`.
pub fn plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let magnitude = digits.magnitude().to_string();

    let body = if scale <= 0 {
        if magnitude == "0" {
            magnitude
        } else {
            let zeros = "0".repeat(scale.unsigned_abs() as usize);
            format!("{}{}", magnitude, zeros)
        }
    } else {
        let scale = scale as usize;
        let padded = if magnitude.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - magnitude.len()), magnitude)
        } else {
            magnitude
        };
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        format!("{}.{}", integer, fraction)
    };

    if digits.sign() == Sign::Minus {
        format!("-{}", body)
    } else {
        body
    }
}
