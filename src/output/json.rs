//! JSON output format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::comparator::{plain_string, Change};
use crate::config::Config;
use crate::presenter::{Description, Presenter};

use super::{OutputFormatter, Rendered};

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonComparison {
    value: String,
    other: String,
    difference: String,
    change: Change,
    percentage: Change,
    description: Description,
    formatted: JsonFormatted,
}

#[derive(Serialize)]
struct JsonFormatted {
    difference: String,
    percentage: Option<String>,
    arrow: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dom_classes: Option<String>,
    inline_style: String,
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        presenter: &Presenter<'_>,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let rendered = Rendered::new(presenter, config);
        let comparator = presenter.comparator();

        let output = JsonComparison {
            value: plain_string(comparator.value()),
            other: plain_string(comparator.other()),
            difference: plain_string(comparator.difference()),
            change: comparator.change().clone(),
            percentage: comparator.percentage().clone(),
            description: rendered.description,
            formatted: JsonFormatted {
                difference: rendered.difference,
                percentage: rendered.percentage,
                arrow: rendered.arrow,
                icon: rendered.icon.into_found(),
                dom_classes: rendered.dom_classes.into_found(),
                inline_style: rendered.inline_style,
            },
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryBackend;
    use crate::presenter::compare;
    use serde_json::{json, Value};

    fn render(value: &str, other: &str, backend: &MemoryBackend) -> Value {
        let presenter = compare(value, other, backend).unwrap();
        let mut out = Vec::new();
        JsonOutput::compact()
            .render(&presenter, &Config::default(), &mut out)
            .unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_positive_document() {
        let mut backend = MemoryBackend::new("en");
        backend.store_translations(
            "en",
            json!({ "comparison": { "dom_classes": { "positive": "comparison positive" } } }),
        );
        let doc = render("100", "75", &backend);

        assert_eq!(doc["value"], "100");
        assert_eq!(doc["other"], "75");
        assert_eq!(doc["difference"], "25");
        assert_eq!(doc["description"], "positive");
        assert_eq!(doc["formatted"]["difference"], "+$25.00");
        assert_eq!(doc["formatted"]["percentage"], "+33%");
        assert_eq!(doc["formatted"]["arrow"], "&uarr;");
        assert_eq!(doc["formatted"]["dom_classes"], "comparison positive");
        assert_eq!(doc["formatted"]["inline_style"], "");
        assert!(doc["formatted"].get("icon").is_none());
    }

    #[test]
    fn test_special_changes() {
        let backend = MemoryBackend::new("en");

        let doc = render("0", "0", &backend);
        assert_eq!(doc["change"], "NaN");
        assert_eq!(doc["description"], "nochange");
        assert_eq!(doc["formatted"]["percentage"], "0%");

        let doc = render("-5", "0", &backend);
        assert_eq!(doc["change"], "-Infinity");
        assert_eq!(doc["formatted"]["percentage"], Value::Null);
    }

    #[test]
    fn test_wide_values_stay_positional() {
        let backend = MemoryBackend::new("en");
        let doc = render("1e30", "0.5", &backend);
        assert_eq!(doc["value"], "1000000000000000000000000000000");
        assert_eq!(doc["difference"], "999999999999999999999999999999.5");
        assert_eq!(doc["change"], "1999999999999999999999999999999");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let backend = MemoryBackend::new("en");
        let presenter = compare(2, 1, &backend).unwrap();
        let mut out = Vec::new();
        JsonOutput::new()
            .render(&presenter, &Config::default(), &mut out)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().lines().count() > 1);
    }
}
