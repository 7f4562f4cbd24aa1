//! comparison - Compare two numbers and render the result

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use comparison::config::{Config, OutputFormat};
use comparison::format::MAX_PRECISION;
use comparison::output::render_to_stdout;
use comparison::{compare, NumberFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Html,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Html => OutputFormat::Html,
        }
    }
}

/// Compare a value against a baseline and render the difference
#[derive(Parser, Debug)]
#[command(name = "comparison")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Value to compare
    value: String,

    /// Baseline the value is compared against
    other: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// JSON translation file keyed by locale
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Locale used for translation lookups
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Locale(s) to fall back on (comma-separated)
    #[arg(long, value_delimiter = ',')]
    fallback_locale: Vec<String>,

    /// Fractional digits in the percentage
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))]
    precision: Option<u32>,

    /// Fractional digits in the currency difference
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))]
    currency_precision: Option<u32>,

    /// Currency unit (e.g. "€")
    #[arg(long)]
    unit: Option<String>,

    /// Thousands delimiter
    #[arg(long, conflicts_with = "no_delimiter")]
    delimiter: Option<String>,

    /// Disable thousands grouping
    #[arg(long)]
    no_delimiter: bool,

    /// Show the percentage without its sign
    #[arg(long)]
    unsigned: bool,

    /// Colorize terminal output
    #[arg(long)]
    color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(changed) => {
            if changed {
                ExitCode::from(1) // Values differ
            } else {
                ExitCode::SUCCESS // No change
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let config = build_config(&cli);
    debug!(?config, "resolved configuration");

    let translator = config.translator().with_context(|| {
        format!(
            "Failed to load translations for locale {}",
            config.locale
        )
    })?;

    let presenter = compare(cli.value.as_str(), cli.other.as_str(), &translator)
        .with_context(|| format!("Cannot compare {:?} with {:?}", cli.value, cli.other))?;

    render_to_stdout(&presenter, &config)?;

    Ok(presenter.is_nonzero())
}

fn build_config(cli: &Cli) -> Config {
    let delimiter = if cli.no_delimiter {
        Some(String::new())
    } else {
        cli.delimiter.clone()
    };

    let mut currency = NumberFormat::new();
    currency.unit = cli.unit.clone();
    currency.precision = cli.currency_precision;
    currency.delimiter = delimiter.clone();

    let mut percentage = NumberFormat::new();
    percentage.precision = cli.precision;
    percentage.delimiter = delimiter;

    let mut config = Config::new(cli.locale.clone())
        .with_fallback_locales(cli.fallback_locale.clone())
        .with_output_format(cli.format.into())
        .with_currency(currency)
        .with_percentage(percentage)
        .with_unsigned(cli.unsigned)
        .with_color(cli.color);

    if let Some(path) = &cli.translations {
        config = config.with_translations(path.clone());
    }
    config
}
