//! HTML fragment output

use std::io::Write;

use anyhow::Result;

use crate::config::Config;
use crate::presenter::Presenter;

use super::{OutputFormatter, Rendered};

/// Renders a comparison as a single `<span>`
///
/// Arrow and infinity translations come from `_html` keys and are written
/// as-is; every other value is escaped.
pub struct HtmlOutput;

impl HtmlOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlOutput {
    fn render(
        &self,
        presenter: &Presenter<'_>,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let rendered = Rendered::new(presenter, config);

        write!(writer, "<span")?;
        if let Some(classes) = rendered.dom_classes.as_found() {
            write!(writer, " class=\"{}\"", html_escape(classes))?;
        }
        if !rendered.inline_style.is_empty() {
            write!(writer, " style=\"{}\"", html_escape(&rendered.inline_style))?;
        }
        write!(writer, ">")?;

        if !rendered.arrow.is_empty() {
            write!(writer, "{} ", rendered.arrow)?;
        }
        write!(writer, "{}", html_escape(&rendered.difference))?;

        if let Some(percentage) = &rendered.percentage {
            let percentage = if presenter.is_infinite() {
                percentage.clone()
            } else {
                html_escape(percentage)
            };
            write!(writer, " ({})", percentage)?;
        }

        writeln!(writer, "</span>")?;
        Ok(())
    }
}

fn html_escape(s: impl AsRef<str>) -> String {
    s.as_ref()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
