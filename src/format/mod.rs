//! Currency and percentage formatting for exact decimals

mod locale;
mod number;

use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

pub use locale::{locale_defaults, NumberKind};

/// Largest number of fractional digits a formatter will render
///
/// Larger requested precisions are clamped to this value.
pub const MAX_PRECISION: u32 = 100;

/// Formatting options
///
/// Every field is optional so option sets can be layered: explicit caller
/// options first, then presenter defaults, then locale defaults, then the
/// built-in `en` defaults.
///
/// `format` and `negative_format` are patterns where `%u` is replaced by the
/// unit and `%n` by the number. An empty `delimiter` disables digit grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub unit: Option<String>,
    pub separator: Option<String>,
    pub delimiter: Option<String>,
    pub precision: Option<u32>,
    pub format: Option<String>,
    pub negative_format: Option<String>,
    pub strip_insignificant_zeros: Option<bool>,
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Disable digit grouping
    pub fn without_delimiter(self) -> Self {
        self.with_delimiter("")
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_negative_format(mut self, format: impl Into<String>) -> Self {
        self.negative_format = Some(format.into());
        self
    }

    pub fn with_strip_insignificant_zeros(mut self, strip: bool) -> Self {
        self.strip_insignificant_zeros = Some(strip);
        self
    }

    /// Fill every unset field from `fallback`
    pub fn or(&self, fallback: &NumberFormat) -> NumberFormat {
        NumberFormat {
            unit: self.unit.clone().or_else(|| fallback.unit.clone()),
            separator: self.separator.clone().or_else(|| fallback.separator.clone()),
            delimiter: self.delimiter.clone().or_else(|| fallback.delimiter.clone()),
            precision: self.precision.or(fallback.precision),
            format: self.format.clone().or_else(|| fallback.format.clone()),
            negative_format: self
                .negative_format
                .clone()
                .or_else(|| fallback.negative_format.clone()),
            strip_insignificant_zeros: self
                .strip_insignificant_zeros
                .or(fallback.strip_insignificant_zeros),
        }
    }

    fn resolve(&self, kind: NumberKind) -> Resolved {
        let builtin = kind.builtin();
        let format = self.format.clone().unwrap_or(builtin.format);
        Resolved {
            unit: self.unit.clone().unwrap_or(builtin.unit),
            separator: self.separator.clone().unwrap_or(builtin.separator),
            delimiter: self.delimiter.clone().unwrap_or(builtin.delimiter),
            precision: self.precision.unwrap_or(builtin.precision).min(MAX_PRECISION),
            negative_format: self
                .negative_format
                .clone()
                .unwrap_or_else(|| format!("-{}", format)),
            format,
            strip_insignificant_zeros: self.strip_insignificant_zeros.unwrap_or(false),
        }
    }
}

/// Options with every field decided
struct Resolved {
    unit: String,
    separator: String,
    delimiter: String,
    precision: u32,
    format: String,
    negative_format: String,
    strip_insignificant_zeros: bool,
}

impl Resolved {
    fn digits(&self, rounded: &BigDecimal) -> String {
        number::digits(
            rounded,
            self.precision,
            &self.separator,
            &self.delimiter,
            self.strip_insignificant_zeros,
        )
    }
}

/// Built-in defaults for one kind of number
pub(crate) struct Builtin {
    unit: String,
    separator: String,
    delimiter: String,
    precision: u32,
    format: String,
}

/// Format `value` as currency
///
/// Negative amounts use `negative_format` on the magnitude. An amount that
/// rounds to zero is rendered unsigned.
pub fn format_currency(value: &BigDecimal, options: &NumberFormat) -> String {
    let resolved = options.resolve(NumberKind::Currency);
    let rounded = number::round(value, resolved.precision);

    let pattern = if rounded.is_negative() {
        &resolved.negative_format
    } else {
        &resolved.format
    };

    pattern
        .replace("%n", &resolved.digits(&rounded))
        .replace("%u", &resolved.unit)
}

/// Format `value` (already multiplied by 100) as a percentage
pub fn format_percentage(value: &BigDecimal, options: &NumberFormat) -> String {
    let resolved = options.resolve(NumberKind::Percentage);
    let rounded = number::round(value, resolved.precision);

    let sign = if rounded.is_negative() { "-" } else { "" };
    let number = format!("{}{}", sign, resolved.digits(&rounded));

    resolved
        .format
        .replace("%n", &number)
        .replace("%u", &resolved.unit)
}
