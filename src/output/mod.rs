//! Output formatting for rendered comparisons

mod html;
mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::{Config, OutputFormat};
use crate::i18n::Translation;
use crate::presenter::{Description, Presenter};

pub use html::HtmlOutput;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a presenter to a writer
    fn render(&self, presenter: &Presenter<'_>, config: &Config, writer: &mut dyn Write)
        -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::with_color(color)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Html => Box::new(HtmlOutput::new()),
        }
    }
}

/// Every presentation artifact for one comparison, formatted per `config`
pub struct Rendered {
    pub description: Description,
    pub difference: String,
    pub percentage: Option<String>,
    pub arrow: String,
    pub icon: Translation,
    pub dom_classes: Translation,
    pub inline_style: String,
}

impl Rendered {
    pub fn new(presenter: &Presenter<'_>, config: &Config) -> Self {
        let percentage = if config.unsigned {
            presenter.unsigned_percentage(&config.percentage)
        } else {
            presenter.percentage(&config.percentage)
        };

        Self {
            description: presenter.description(),
            difference: presenter.difference_as_currency(&config.currency),
            percentage,
            arrow: presenter.arrow(),
            icon: presenter.icon(),
            dom_classes: presenter.dom_classes(),
            inline_style: presenter.inline_style(),
        }
    }
}

/// Render a presenter to stdout
pub fn render_to_stdout(presenter: &Presenter<'_>, config: &Config) -> Result<()> {
    let formatter = OutputFactory::create(config.output_format, config.color);
    let mut stdout = std::io::stdout();
    formatter.render(presenter, config, &mut stdout)
}
