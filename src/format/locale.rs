//! Locale-provided number formatting defaults

use tracing::debug;

use crate::i18n::Translate;

use super::{Builtin, NumberFormat};

/// Which family of number is being formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Currency,
    Percentage,
}

impl NumberKind {
    fn scope(self) -> &'static str {
        match self {
            NumberKind::Currency => "number.currency.format",
            NumberKind::Percentage => "number.percentage.format",
        }
    }

    pub(crate) fn builtin(self) -> Builtin {
        match self {
            NumberKind::Currency => Builtin {
                unit: "$".to_string(),
                separator: ".".to_string(),
                delimiter: ",".to_string(),
                precision: 2,
                format: "%u%n".to_string(),
            },
            NumberKind::Percentage => Builtin {
                unit: String::new(),
                separator: ".".to_string(),
                delimiter: String::new(),
                precision: 3,
                format: "%n%".to_string(),
            },
        }
    }
}

/// Read formatting defaults for `kind` from the translator
///
/// Keys under `number.format` apply to every kind; keys under the kind's own
/// scope (`number.currency.format`, `number.percentage.format`) take
/// precedence. Values that do not parse are ignored.
pub fn locale_defaults(translator: &dyn Translate, kind: NumberKind) -> NumberFormat {
    let specific = read_scope(translator, kind.scope());
    let general = read_scope(translator, "number.format");
    specific.or(&general)
}

fn read_scope(translator: &dyn Translate, scope: &str) -> NumberFormat {
    let get = |field: &str| translator.lookup(&format!("{}.{}", scope, field));

    NumberFormat {
        unit: get("unit"),
        separator: get("separator"),
        delimiter: get("delimiter"),
        precision: get("precision").and_then(|p| match p.trim().parse() {
            Ok(precision) => Some(precision),
            Err(_) => {
                debug!(scope, value = %p, "ignoring unparsable locale precision");
                None
            }
        }),
        format: get("format"),
        negative_format: get("negative_format"),
        strip_insignificant_zeros: get("strip_insignificant_zeros").and_then(|s| s.trim().parse().ok()),
    }
}
