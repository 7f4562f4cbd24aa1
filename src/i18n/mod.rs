//! Translation lookup with fallback chains

mod memory;

use std::fmt;

use serde::Serialize;
use tracing::debug;

pub use memory::MemoryBackend;

/// One step of a default chain tried after the primary key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Another key to look up
    Key(String),
    /// A literal value that always resolves
    Literal(String),
}

/// Outcome of a translation with defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Found(String),
    /// Nothing resolved and no literal default was given
    Missing { locale: String, key: String },
}

impl Translation {
    pub fn is_missing(&self) -> bool {
        matches!(self, Translation::Missing { .. })
    }

    pub fn as_found(&self) -> Option<&str> {
        match self {
            Translation::Found(s) => Some(s),
            Translation::Missing { .. } => None,
        }
    }

    pub fn into_found(self) -> Option<String> {
        match self {
            Translation::Found(s) => Some(s),
            Translation::Missing { .. } => None,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Found(s) => f.write_str(s),
            Translation::Missing { locale, key } => {
                write!(f, "translation missing: {}.{}", locale, key)
            }
        }
    }
}

impl Serialize for Translation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A key to string translation source
pub trait Translate {
    /// Locale used for lookups and missing-key reports
    fn locale(&self) -> &str;

    /// Resolve a single dotted key
    fn lookup(&self, key: &str) -> Option<String>;

    /// Resolve `key`, then each default in order
    ///
    /// Key defaults are looked up; the first literal default ends the chain.
    /// When nothing resolves the result names the primary key.
    fn translate(&self, key: &str, defaults: &[Fallback]) -> Translation {
        if let Some(found) = self.lookup(key) {
            return Translation::Found(found);
        }

        for default in defaults {
            match default {
                Fallback::Key(fallback) => {
                    if let Some(found) = self.lookup(fallback) {
                        debug!(key, fallback = %fallback, "resolved translation through fallback key");
                        return Translation::Found(found);
                    }
                }
                Fallback::Literal(literal) => return Translation::Found(literal.clone()),
            }
        }

        Translation::Missing {
            locale: self.locale().to_string(),
            key: key.to_string(),
        }
    }
}
