//! Translation key families and fallback resolution

use tracing::debug;

use crate::i18n::{Fallback, Translate, Translation};

use super::Description;

/// An ordered list of key families under `comparison.` sharing one suffix
///
/// The first family is the current name; later families are older names
/// still honoured as fallbacks.
pub(crate) struct KeyFamilies {
    pub families: &'static [&'static str],
    pub suffix: &'static str,
}

pub(crate) const ICONS: KeyFamilies = KeyFamilies {
    families: &["icons"],
    suffix: "_html",
};

pub(crate) const ARROWS: KeyFamilies = KeyFamilies {
    families: &["arrows"],
    suffix: "_html",
};

pub(crate) const DOM_CLASSES: KeyFamilies = KeyFamilies {
    families: &["dom_classes", "classes"],
    suffix: "",
};

pub(crate) const INLINE_STYLE: KeyFamilies = KeyFamilies {
    families: &["inline_style", "style", "css"],
    suffix: "",
};

pub(crate) const INFINITY: &str = "comparison.infinity_html";

impl KeyFamilies {
    /// Fully qualified keys for `description`, in lookup order
    pub fn expand(&self, description: Description) -> Vec<String> {
        self.families
            .iter()
            .map(|family| format!("comparison.{}.{}{}", family, description, self.suffix))
            .collect()
    }

    /// Look up the first key, falling back through the rest and then `terminal`
    pub fn resolve(
        &self,
        translator: &dyn Translate,
        description: Description,
        terminal: Option<&str>,
    ) -> Translation {
        let mut keys = self.expand(description).into_iter();
        let Some(primary) = keys.next() else {
            return match terminal {
                Some(literal) => Translation::Found(literal.to_string()),
                None => Translation::Missing {
                    locale: translator.locale().to_string(),
                    key: format!("comparison.{}", description),
                },
            };
        };

        let mut defaults: Vec<Fallback> = keys.map(Fallback::Key).collect();
        if let Some(literal) = terminal {
            defaults.push(Fallback::Literal(literal.to_string()));
        }

        let translation = translator.translate(&primary, &defaults);
        if translation.is_missing() {
            debug!(key = %primary, "no translation for comparison key");
        }
        translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryBackend;

    #[test]
    fn test_expand_orders_families() {
        assert_eq!(
            INLINE_STYLE.expand(Description::Negative),
            vec![
                "comparison.inline_style.negative",
                "comparison.style.negative",
                "comparison.css.negative",
            ]
        );
        assert_eq!(
            ARROWS.expand(Description::NoChange),
            vec!["comparison.arrows.nochange_html"]
        );
    }

    #[test]
    fn test_resolve_uses_terminal_literal() {
        let backend = MemoryBackend::new("en");
        let t = INLINE_STYLE.resolve(&backend, Description::Positive, Some(""));
        assert_eq!(t, Translation::Found(String::new()));

        let t = DOM_CLASSES.resolve(&backend, Description::Positive, None);
        assert_eq!(
            t,
            Translation::Missing {
                locale: "en".into(),
                key: "comparison.dom_classes.positive".into(),
            }
        );
    }

    #[test]
    fn test_resolve_with_no_families() {
        let empty = KeyFamilies {
            families: &[],
            suffix: "",
        };
        let backend = MemoryBackend::new("en");
        assert_eq!(
            empty.resolve(&backend, Description::Positive, Some("x")),
            Translation::Found("x".into())
        );
        assert!(empty.resolve(&backend, Description::Positive, None).is_missing());
    }
}
