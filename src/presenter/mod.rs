//! View-friendly rendering of a comparison

pub mod deprecated;
mod keys;

use std::fmt;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::Serialize;

use crate::comparator::{Change, Comparator, Numeric};
use crate::error::Result;
use crate::format::{format_currency, format_percentage, locale_defaults, NumberFormat, NumberKind};
use crate::i18n::{Translate, Translation};

use keys::{ARROWS, DOM_CLASSES, ICONS, INFINITY, INLINE_STYLE};

/// Direction of a comparison as used in translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Description {
    Positive,
    Negative,
    NoChange,
}

impl Description {
    pub fn as_str(self) -> &'static str {
        match self {
            Description::Positive => "positive",
            Description::Negative => "negative",
            Description::NoChange => "nochange",
        }
    }

    /// Built-in arrow entity used when no arrow translation exists
    pub fn default_arrow(self) -> &'static str {
        match self {
            Description::Positive => "&uarr;",
            Description::Negative => "&darr;",
            Description::NoChange => "",
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps a [`Comparator`] with methods that return view-friendly output
///
/// Every comparator accessor is forwarded by name. The one exception is
/// `percentage`, which here returns the formatted string; the raw value is
/// available through [`Presenter::comparator`].
///
/// Translations come from the borrowed [`Translate`] implementation. Keys
/// live under `comparison.`:
///
/// ```json
/// { "en": { "comparison": {
///     "icons":        { "positive_html": "<i class=\"up\"></i>" },
///     "arrows":       { "negative_html": "&darr;" },
///     "dom_classes":  { "nochange": "comparison nochange" },
///     "inline_style": { "positive": "color: #3c763d;" },
///     "infinity_html": "&infin;"
/// } } }
/// ```
#[derive(Clone)]
pub struct Presenter<'a> {
    comparator: Comparator,
    translator: &'a dyn Translate,
}

impl<'a> Presenter<'a> {
    pub fn new(comparator: Comparator, translator: &'a dyn Translate) -> Self {
        Self {
            comparator,
            translator,
        }
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    pub fn translator(&self) -> &'a dyn Translate {
        self.translator
    }

    pub fn value(&self) -> &BigDecimal {
        self.comparator.value()
    }

    pub fn other(&self) -> &BigDecimal {
        self.comparator.other()
    }

    pub fn difference(&self) -> &BigDecimal {
        self.comparator.difference()
    }

    pub fn change(&self) -> &Change {
        self.comparator.change()
    }

    pub fn is_positive(&self) -> bool {
        self.comparator.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.comparator.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.comparator.is_zero()
    }

    pub fn is_nonzero(&self) -> bool {
        self.comparator.is_nonzero()
    }

    pub fn is_infinite(&self) -> bool {
        self.comparator.is_infinite()
    }

    pub fn is_nan(&self) -> bool {
        self.comparator.is_nan()
    }

    pub fn description(&self) -> Description {
        if self.is_positive() {
            Description::Positive
        } else if self.is_negative() {
            Description::Negative
        } else {
            Description::NoChange
        }
    }

    /// The difference formatted as currency
    ///
    /// A positive difference gets a leading `+` (`+$25.00`); negative
    /// differences carry their own `-` and zero is unsigned.
    pub fn difference_as_currency(&self, options: &NumberFormat) -> String {
        let options = self.layer(options, NumberKind::Currency, self.is_positive());
        format_currency(self.difference(), &options)
    }

    /// The relative change formatted as a percentage
    ///
    /// Defaults to a `,` delimiter and no fractional digits. NaN and zero
    /// changes render as `0%`. An infinite change renders as the
    /// `comparison.infinity_html` translation, or `None` without one.
    pub fn percentage(&self, options: &NumberFormat) -> Option<String> {
        self.render_percentage(options, true)
    }

    /// Like [`percentage`](Self::percentage) but formats the magnitude only
    ///
    /// Use this when colors or icons already convey the direction.
    pub fn unsigned_percentage(&self, options: &NumberFormat) -> Option<String> {
        self.render_percentage(options, false)
    }

    /// Translation of `comparison.icons.{description}_html`
    ///
    /// There is no built-in icon, so an unconfigured icon is reported as
    /// [`Translation::Missing`].
    pub fn icon(&self) -> Translation {
        ICONS.resolve(self.translator, self.description(), None)
    }

    /// Translation of `comparison.arrows.{description}_html`
    ///
    /// Falls back to `&uarr;`, `&darr;` or an empty string.
    pub fn arrow(&self) -> String {
        let description = self.description();
        ARROWS
            .resolve(self.translator, description, Some(description.default_arrow()))
            .into_found()
            .unwrap_or_default()
    }

    /// Translation of `comparison.dom_classes.{description}`
    ///
    /// Falls back to the older `comparison.classes.{description}`.
    pub fn dom_classes(&self) -> Translation {
        DOM_CLASSES.resolve(self.translator, self.description(), None)
    }

    /// Translation of `comparison.inline_style.{description}`
    ///
    /// Falls back to `comparison.style.*`, then `comparison.css.*`, then an
    /// empty string so the result can always be used as a style attribute.
    pub fn inline_style(&self) -> String {
        INLINE_STYLE
            .resolve(self.translator, self.description(), Some(""))
            .into_found()
            .unwrap_or_default()
    }

    /// Alias of [`inline_style`](Self::inline_style)
    pub fn style(&self) -> String {
        self.inline_style()
    }

    fn render_percentage(&self, options: &NumberFormat, signed: bool) -> Option<String> {
        if self.is_nan() || self.is_zero() {
            let options = self.layer(options, NumberKind::Percentage, false);
            return Some(format_percentage(&BigDecimal::zero(), &options));
        }

        if self.is_infinite() {
            return self.translator.lookup(INFINITY);
        }

        let percentage = self.comparator.percentage().as_finite()?;
        let (amount, force_plus) = if signed {
            (percentage.clone(), self.is_positive())
        } else {
            (percentage.abs(), false)
        };

        let options = self.layer(options, NumberKind::Percentage, force_plus);
        Some(format_percentage(&amount, &options))
    }

    /// Stack caller options over presenter defaults and locale defaults
    ///
    /// With `force_plus` and no caller-supplied pattern, the effective
    /// pattern gets a leading `+`.
    fn layer(&self, options: &NumberFormat, kind: NumberKind, force_plus: bool) -> NumberFormat {
        let presenter_defaults = match kind {
            NumberKind::Currency => NumberFormat::new(),
            NumberKind::Percentage => NumberFormat::new().with_delimiter(",").with_precision(0),
        };
        let locale = locale_defaults(self.translator, kind);
        let mut layered = options.or(&presenter_defaults).or(&locale);

        if force_plus && options.format.is_none() {
            let base = layered
                .format
                .clone()
                .unwrap_or_else(|| default_pattern(kind).to_string());
            layered.format = Some(format!("+{}", base));
        }
        layered
    }
}

fn default_pattern(kind: NumberKind) -> &'static str {
    match kind {
        NumberKind::Currency => "%u%n",
        NumberKind::Percentage => "%n%",
    }
}

impl fmt::Debug for Presenter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("comparator", &self.comparator)
            .field("locale", &self.translator.locale())
            .finish()
    }
}

impl AsRef<Comparator> for Presenter<'_> {
    fn as_ref(&self) -> &Comparator {
        &self.comparator
    }
}

/// Build a [`Presenter`] comparing `value` against `other`
pub fn compare<'a>(
    value: impl Numeric,
    other: impl Numeric,
    translator: &'a dyn Translate,
) -> Result<Presenter<'a>> {
    Ok(Presenter::new(Comparator::new(value, other)?, translator))
}

/// Like [`compare`], handing the presenter to `f` before returning it
pub fn compare_with<'a, F>(
    value: impl Numeric,
    other: impl Numeric,
    translator: &'a dyn Translate,
    f: F,
) -> Result<Presenter<'a>>
where
    F: FnOnce(&Presenter<'a>),
{
    let presenter = compare(value, other, translator)?;
    f(&presenter);
    Ok(presenter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComparisonError;
    use crate::i18n::MemoryBackend;
    use serde_json::{json, Value};

    fn backend(tree: Value) -> MemoryBackend {
        let mut backend = MemoryBackend::new("en");
        backend.store_translations("en", tree);
        backend
    }

    fn empty() -> MemoryBackend {
        MemoryBackend::new("en")
    }

    fn presenter(backend: &MemoryBackend, value: i64, other: i64) -> Presenter<'_> {
        compare(value, other, backend).unwrap()
    }

    fn positive(backend: &MemoryBackend) -> Presenter<'_> {
        presenter(backend, 100, 75)
    }

    fn negative(backend: &MemoryBackend) -> Presenter<'_> {
        presenter(backend, 75, 100)
    }

    fn nochange(backend: &MemoryBackend) -> Presenter<'_> {
        presenter(backend, 75, 75)
    }

    fn defaults() -> NumberFormat {
        NumberFormat::default()
    }

    #[test]
    fn test_difference_as_currency() {
        let b = empty();
        assert_eq!(presenter(&b, 1_000, 2_000).difference_as_currency(&defaults()), "-$1,000.00");
        assert_eq!(presenter(&b, 2_000, 1_000).difference_as_currency(&defaults()), "+$1,000.00");
        assert_eq!(presenter(&b, 100, 100).difference_as_currency(&defaults()), "$0.00");
        assert_eq!(positive(&b).difference_as_currency(&defaults()), "+$25.00");
    }

    #[test]
    fn test_difference_as_currency_options() {
        let b = empty();
        let opts = NumberFormat::new().with_unit("£").with_precision(0);
        assert_eq!(positive(&b).difference_as_currency(&opts), "+£25");
        assert_eq!(negative(&b).difference_as_currency(&opts), "-£25");
    }

    #[test]
    fn test_difference_as_currency_follows_locale_pattern() {
        let b = backend(json!({
            "number": { "currency": { "format": {
                "unit": "€", "format": "%n %u", "separator": ",", "delimiter": "."
            } } }
        }));
        assert_eq!(presenter(&b, 2_000, 1_000).difference_as_currency(&defaults()), "+1.000,00 €");
        assert_eq!(presenter(&b, 1_000, 2_000).difference_as_currency(&defaults()), "-1.000,00 €");
    }

    #[test]
    fn test_percentage() {
        let b = empty();
        assert_eq!(presenter(&b, 1_000, 2_000).percentage(&defaults()).as_deref(), Some("-50%"));
        assert_eq!(presenter(&b, 1_100, 100).percentage(&defaults()).as_deref(), Some("+1,000%"));
        assert_eq!(presenter(&b, 1, 1).percentage(&defaults()).as_deref(), Some("0%"));
        assert_eq!(presenter(&b, 0, 0).percentage(&defaults()).as_deref(), Some("0%"));
        assert_eq!(positive(&b).percentage(&defaults()).as_deref(), Some("+33%"));
        assert_eq!(negative(&b).percentage(&defaults()).as_deref(), Some("-25%"));
    }

    #[test]
    fn test_percentage_infinity() {
        let b = empty();
        assert_eq!(presenter(&b, 1, 0).percentage(&defaults()), None);
        assert_eq!(presenter(&b, -1, 0).unsigned_percentage(&defaults()), None);

        let b = backend(json!({ "comparison": { "infinity_html": "&infin;" } }));
        assert_eq!(presenter(&b, 100, 0).percentage(&defaults()).as_deref(), Some("&infin;"));
        assert_eq!(presenter(&b, -100, 0).unsigned_percentage(&defaults()).as_deref(), Some("&infin;"));
    }

    #[test]
    fn test_percentage_options() {
        let b = empty();
        let no_delimiter = NumberFormat::new().without_delimiter();
        assert_eq!(presenter(&b, 11, 1).percentage(&no_delimiter).as_deref(), Some("+1000%"));

        let precise = NumberFormat::new().with_precision(2);
        assert_eq!(positive(&b).percentage(&precise).as_deref(), Some("+33.33%"));
        assert_eq!(nochange(&b).percentage(&precise).as_deref(), Some("0.00%"));

        let pattern = NumberFormat::new().with_format("%n%");
        assert_eq!(positive(&b).percentage(&pattern).as_deref(), Some("33%"));
    }

    #[test]
    fn test_unsigned_percentage() {
        let b = empty();
        assert_eq!(positive(&b).unsigned_percentage(&defaults()).as_deref(), Some("33%"));
        assert_eq!(negative(&b).unsigned_percentage(&defaults()).as_deref(), Some("25%"));
        assert_eq!(nochange(&b).unsigned_percentage(&defaults()).as_deref(), Some("0%"));
        assert_eq!(presenter(&b, 0, 0).unsigned_percentage(&defaults()).as_deref(), Some("0%"));
    }

    #[test]
    fn test_negative_baseline_percentage() {
        let b = empty();
        assert_eq!(presenter(&b, 100, -75).percentage(&defaults()).as_deref(), Some("+233%"));
        assert_eq!(presenter(&b, -75, 100).percentage(&defaults()).as_deref(), Some("-175%"));
    }

    #[test]
    fn test_icon() {
        let up = r#"<span class="glyphicon glyphicon-arrow-up"></span>"#;
        let down = r#"<span class="glyphicon glyphicon-arrow-down"></span>"#;
        let minus = r#"<span class="glyphicon glyphicon-minus"></span>"#;
        let b = backend(json!({ "comparison": { "icons": {
            "positive_html": up, "negative_html": down, "nochange_html": minus
        } } }));
        assert_eq!(positive(&b).icon(), Translation::Found(up.into()));
        assert_eq!(negative(&b).icon(), Translation::Found(down.into()));
        assert_eq!(nochange(&b).icon(), Translation::Found(minus.into()));
    }

    #[test]
    fn test_icon_missing() {
        let b = empty();
        let icon = positive(&b).icon();
        assert!(icon.is_missing());
        assert_eq!(
            icon.to_string(),
            "translation missing: en.comparison.icons.positive_html"
        );
    }

    #[test]
    fn test_arrow() {
        let b = empty();
        assert_eq!(positive(&b).arrow(), "&uarr;");
        assert_eq!(negative(&b).arrow(), "&darr;");
        assert_eq!(nochange(&b).arrow(), "");

        let b = backend(json!({ "comparison": { "arrows": {
            "positive_html": "&#9650;", "nochange_html": "&ndash;"
        } } }));
        assert_eq!(positive(&b).arrow(), "&#9650;");
        assert_eq!(negative(&b).arrow(), "&darr;");
        assert_eq!(nochange(&b).arrow(), "&ndash;");
    }

    #[test]
    fn test_dom_classes() {
        for (family, value) in [("dom_classes", "current"), ("classes", "legacy")] {
            let b = backend(json!({ "comparison": { family: {
                "positive": format!("{value} positive"),
                "negative": format!("{value} negative"),
                "nochange": format!("{value} nochange"),
            } } }));
            assert_eq!(positive(&b).dom_classes().to_string(), format!("{value} positive"));
            assert_eq!(negative(&b).dom_classes().to_string(), format!("{value} negative"));
            assert_eq!(nochange(&b).dom_classes().to_string(), format!("{value} nochange"));
        }
    }

    #[test]
    fn test_dom_classes_prefers_current_family() {
        let b = backend(json!({ "comparison": {
            "dom_classes": { "positive": "new" },
            "classes": { "positive": "old", "negative": "old" }
        } }));
        assert_eq!(positive(&b).dom_classes().as_found(), Some("new"));
        assert_eq!(negative(&b).dom_classes().as_found(), Some("old"));
        assert!(nochange(&b).dom_classes().is_missing());
    }

    #[test]
    fn test_inline_style_fallback_chain() {
        let style = "color: #777;";
        for family in ["inline_style", "style", "css"] {
            let b = backend(json!({ "comparison": { family: {
                "positive": style, "negative": style, "nochange": style
            } } }));
            assert_eq!(positive(&b).inline_style(), style, "family {family}");
            assert_eq!(negative(&b).style(), style, "family {family}");
            assert_eq!(nochange(&b).inline_style(), style, "family {family}");
        }
    }

    #[test]
    fn test_inline_style_defaults_to_empty_string() {
        let b = empty();
        assert_eq!(positive(&b).inline_style(), "");
        assert_eq!(negative(&b).inline_style(), "");
        assert_eq!(nochange(&b).style(), "");
    }

    #[test]
    fn test_description() {
        let b = empty();
        assert_eq!(positive(&b).description(), Description::Positive);
        assert_eq!(negative(&b).description(), Description::Negative);
        assert_eq!(nochange(&b).description(), Description::NoChange);
        assert_eq!(presenter(&b, 0, 0).description().as_str(), "nochange");
        assert_eq!(presenter(&b, 5, 0).description().to_string(), "positive");
    }

    #[test]
    fn test_forwards_comparator_members() {
        let b = empty();
        let p = presenter(&b, 100, 75);
        assert_eq!(p.value(), p.comparator().value());
        assert_eq!(p.other(), p.comparator().other());
        assert_eq!(p.difference(), &BigDecimal::from(25_i64));
        assert_eq!(p.change(), p.comparator().change());
        assert!(p.is_positive() && p.is_nonzero());
        assert!(!p.is_negative() && !p.is_zero() && !p.is_nan() && !p.is_infinite());
    }

    #[test]
    fn test_huge_difference_is_formatted() {
        let b = empty();
        let p = compare("1000000000000000000000000000", 1, &b).unwrap();
        assert_eq!(
            p.difference_as_currency(&defaults()),
            "+$999,999,999,999,999,999,999,999,999.00"
        );
        assert_eq!(
            p.percentage(&defaults()).as_deref(),
            Some("+99,999,999,999,999,999,999,999,999,900%")
        );
        assert_eq!(p.arrow(), "&uarr;");
    }

    #[test]
    fn test_long_fraction_is_formatted() {
        let b = empty();
        let p = compare("0.12345678901234567890123456789", "0.1", &b).unwrap();
        assert_eq!(p.difference_as_currency(&defaults()), "+$0.02");
        assert_eq!(
            p.percentage(&NumberFormat::new().with_precision(26)).as_deref(),
            Some("+23.45678901234567890123456789%")
        );
    }

    #[test]
    fn test_output_is_idempotent() {
        let b = empty();
        let p = positive(&b);
        let opts = NumberFormat::new().with_precision(1);
        assert_eq!(p.percentage(&opts), p.percentage(&opts));
        assert_eq!(p.difference_as_currency(&opts), p.difference_as_currency(&opts));
        assert_eq!(p.arrow(), p.arrow());
        assert_eq!(p.comparator(), &Comparator::new(100, 75).unwrap());
    }

    #[test]
    fn test_compare_with_yields_presenter() {
        let b = empty();
        let mut seen = None;
        let p = compare_with(100, 75, &b, |cmp| seen = cmp.percentage(&NumberFormat::default()))
            .unwrap();
        assert_eq!(seen.as_deref(), Some("+33%"));
        assert_eq!(p.percentage(&defaults()).as_deref(), Some("+33%"));
    }

    #[test]
    fn test_compare_rejects_invalid_input() {
        let b = empty();
        let mut called = false;
        let err = compare_with("n/a", 1, &b, |_| called = true).unwrap_err();
        assert!(matches!(err, ComparisonError::InvalidNumericInput { .. }));
        assert!(!called);
    }
}
