//! In-memory translation store

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{ComparisonError, Result, TranslationSourceError};

use super::Translate;

/// Translations held in memory, keyed by locale
///
/// Nested objects are flattened into dotted keys when stored, so
/// `{"comparison": {"arrows": {"positive_html": "^"}}}` answers
/// `comparison.arrows.positive_html`. Numbers and booleans are stored as
/// their text; `null` entries are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    locale: String,
    fallbacks: Vec<String>,
    tables: IndexMap<String, FxHashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend answering for `locale`
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Default::default()
        }
    }

    /// Parse a JSON document whose top-level keys are locales
    pub fn from_json_str(json: &str, locale: impl Into<String>) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| ComparisonError::Translations {
            path: None,
            source: e.into(),
        })?;
        let mut backend = Self::new(locale);
        backend
            .store_document(value)
            .map_err(|source| ComparisonError::Translations { path: None, source })?;
        Ok(backend)
    }

    /// Load a JSON translation file whose top-level keys are locales
    pub fn from_path(path: &Path, locale: impl Into<String>) -> Result<Self> {
        let wrap = |source: TranslationSourceError| ComparisonError::Translations {
            path: Some(path.to_path_buf()),
            source,
        };

        let text = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| wrap(e.into()))?;
        let mut backend = Self::new(locale);
        backend.store_document(value).map_err(wrap)?;
        debug!(path = %path.display(), locales = backend.tables.len(), "loaded translations");
        Ok(backend)
    }

    /// Locales tried after the current one, in order
    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks = fallbacks.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Locales that have at least one stored translation
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Merge a nested translation tree into `locale`
    pub fn store_translations(&mut self, locale: &str, tree: Value) {
        let table = self.tables.entry(locale.to_string()).or_default();
        flatten(String::new(), tree, table);
    }

    /// Store a single already-dotted key
    pub fn insert(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
        self.tables
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    fn store_document(&mut self, document: Value) -> std::result::Result<(), TranslationSourceError> {
        let Value::Object(locales) = document else {
            return Err(TranslationSourceError::NotALocaleTable("<root>".to_string()));
        };

        for (locale, tree) in locales {
            if !tree.is_object() {
                return Err(TranslationSourceError::NotALocaleTable(locale));
            }
            self.store_translations(&locale, tree);
        }
        Ok(())
    }

    fn locale_chain(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.locale.as_str()).chain(
            self.fallbacks
                .iter()
                .map(String::as_str)
                .filter(move |l| *l != self.locale),
        )
    }
}

impl Translate for MemoryBackend {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.locale_chain()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.get(key).cloned())
    }
}

fn flatten(prefix: String, value: Value, table: &mut FxHashMap<String, String>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Object(entries) => {
            for (key, child) in entries {
                flatten(join(&key), child, table);
            }
        }
        Value::String(s) => {
            table.insert(prefix, s);
        }
        Value::Number(n) => {
            table.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            table.insert(prefix, b.to_string());
        }
        Value::Null => {
            table.remove(&prefix);
        }
        Value::Array(_) => {
            debug!(key = %prefix, "skipping array translation value");
        }
    }
}
