//! Error types for comparison construction and translation loading
//!
//! Arithmetic on parsed inputs is exact and cannot fail, so invalid input is
//! the only way construction is refused.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = ComparisonError> = std::result::Result<T, E>;

/// Errors raised by the library
///
/// Missing translations are not errors; they surface as
/// [`Translation::Missing`](crate::i18n::Translation::Missing) or as the
/// operation's documented default.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// An input could not be converted to an exact decimal
    #[error("invalid numeric input {input:?}: {reason}")]
    InvalidNumericInput { input: String, reason: String },

    /// Translation data could not be read or parsed
    #[error("failed to load translations from {}", source_label(.path))]
    Translations {
        path: Option<PathBuf>,
        #[source]
        source: TranslationSourceError,
    },
}

/// Underlying cause of a [`ComparisonError::Translations`] failure
#[derive(Debug, Error)]
pub enum TranslationSourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("top-level translation entry {0:?} must be an object keyed by locale")]
    NotALocaleTable(String),
}

fn source_label(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<memory>".to_string(),
    }
}

impl ComparisonError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ComparisonError::InvalidNumericInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
