//! Rounding and digit grouping

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::comparator::plain_string;

/// Round half away from zero to exactly `precision` fractional digits
pub(crate) fn round(value: &BigDecimal, precision: u32) -> BigDecimal {
    let target = i64::from(precision);
    let (digits, scale) = value.as_bigint_and_exponent();

    if scale <= target {
        let factor = BigInt::from(10u32).pow((target - scale) as u32);
        return BigDecimal::new(digits * factor, target);
    }

    let divisor = BigInt::from(10u32).pow((scale - target) as u32);
    let mut quotient = &digits / &divisor;
    let remainder = &digits % &divisor;
    if remainder.abs() * 2u32 >= divisor {
        quotient += digits.signum();
    }
    BigDecimal::new(quotient, target)
}

/// Render the magnitude of an already rounded value
///
/// The fractional part is padded to exactly `precision` digits unless
/// `strip_zeros` is set, in which case trailing zeros (and a bare separator)
/// are dropped.
pub(crate) fn digits(
    rounded: &BigDecimal,
    precision: u32,
    separator: &str,
    delimiter: &str,
    strip_zeros: bool,
) -> String {
    let text = plain_string(&rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() < precision as usize {
        fraction.push('0');
    }
    if strip_zeros {
        let kept = fraction.trim_end_matches('0').len();
        fraction.truncate(kept);
    }

    let integer = delimit(integer, delimiter);
    if fraction.is_empty() {
        integer
    } else {
        format!("{}{}{}", integer, separator, fraction)
    }
}

/// Insert `delimiter` between groups of three integer digits
pub(crate) fn delimit(integer: &str, delimiter: &str) -> String {
    if delimiter.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }

    let mut out = String::with_capacity(integer.len() + delimiter.len() * (integer.len() / 3));
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(ch);
    }
    out
}
