//! Colored terminal output

use std::io::Write;

use anyhow::Result;
use termcolor::{Ansi, Color, ColorSpec, NoColor, WriteColor};

use crate::config::Config;
use crate::presenter::{Description, Presenter};

use super::{OutputFormatter, Rendered};

/// Terminal output with optional ANSI colors
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn write_line(&self, rendered: &Rendered, out: &mut dyn WriteColor) -> Result<()> {
        let mut spec = ColorSpec::new();
        match rendered.description {
            Description::Positive => {
                spec.set_fg(Some(Color::Green));
            }
            Description::Negative => {
                spec.set_fg(Some(Color::Red));
            }
            Description::NoChange => {}
        }
        out.set_color(&spec)?;

        let arrow = decode_entities(&rendered.arrow);
        if !arrow.is_empty() {
            write!(out, "{} ", arrow)?;
        }
        write!(out, "{}", rendered.difference)?;
        if let Some(percentage) = &rendered.percentage {
            write!(out, " ({})", decode_entities(percentage))?;
        }

        out.reset()?;
        writeln!(out)?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        presenter: &Presenter<'_>,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let rendered = Rendered::new(presenter, config);

        if self.color {
            self.write_line(&rendered, &mut Ansi::new(writer))
        } else {
            self.write_line(&rendered, &mut NoColor::new(writer))
        }
    }
}

/// Named entities arrow, icon and infinity translations tend to use
const NAMED_ENTITIES: [(&str, char); 24] = [
    ("uarr", '↑'),
    ("darr", '↓'),
    ("rarr", '→'),
    ("larr", '←'),
    ("harr", '↔'),
    ("uArr", '⇑'),
    ("dArr", '⇓'),
    ("infin", '∞'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("minus", '−'),
    ("plusmn", '±'),
    ("times", '×'),
    ("bull", '•'),
    ("middot", '·'),
    ("hellip", '…'),
    ("nbsp", '\u{a0}'),
    ("euro", '€'),
    ("pound", '£'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("amp", '&'),
];

/// Decode HTML character references for terminal display
///
/// Handles decimal (`&#9650;`) and hex (`&#x25B2;`) references plus the
/// named entities above. Unknown references are left as written.
fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start + 1..];
        let decoded = candidate
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_reference(&candidate[..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, ch)| *ch)
}
