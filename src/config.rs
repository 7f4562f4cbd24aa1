//! Configuration handling for the comparison CLI

use std::path::PathBuf;

use crate::error::Result;
use crate::format::NumberFormat;
use crate::i18n::MemoryBackend;

/// Output format for a rendered comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for rendering one comparison
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale used for translation lookups
    pub locale: String,
    /// Locales tried when the primary locale has no entry
    pub fallback_locales: Vec<String>,
    /// JSON translation file, keyed by locale
    pub translations: Option<PathBuf>,
    /// Output format
    pub output_format: OutputFormat,
    /// Options for the currency difference
    pub currency: NumberFormat,
    /// Options for the percentage change
    pub percentage: NumberFormat,
    /// Render the percentage without its sign
    pub unsigned: bool,
    /// Emit ANSI colors in terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locales: Vec::new(),
            translations: None,
            output_format: OutputFormat::default(),
            currency: NumberFormat::default(),
            percentage: NumberFormat::default(),
            unsigned: false,
            color: false,
        }
    }
}

impl Config {
    /// Create a new Config for a locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Default::default()
        }
    }

    /// Set fallback locales
    pub fn with_fallback_locales(mut self, locales: Vec<String>) -> Self {
        self.fallback_locales = locales;
        self
    }

    /// Set the translation file
    pub fn with_translations(mut self, path: PathBuf) -> Self {
        self.translations = Some(path);
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set currency formatting options
    pub fn with_currency(mut self, options: NumberFormat) -> Self {
        self.currency = options;
        self
    }

    /// Set percentage formatting options
    pub fn with_percentage(mut self, options: NumberFormat) -> Self {
        self.percentage = options;
        self
    }

    /// Render unsigned percentages
    pub fn with_unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    /// Enable colored terminal output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Build the translation backend this configuration describes
    pub fn translator(&self) -> Result<MemoryBackend> {
        let backend = match &self.translations {
            Some(path) => MemoryBackend::from_path(path, self.locale.clone())?,
            None => MemoryBackend::new(self.locale.clone()),
        };
        Ok(backend.with_fallbacks(self.fallback_locales.iter().cloned()))
    }
}
