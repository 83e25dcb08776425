//! Command-line argument structures.

use clap::Parser;

use crate::config::{OutputFormat, ShowcaseConfig};
use crate::showcase::Scenario;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Print bordered text tables built from text, ASCII images and nested tables.
#[derive(Debug, Parser)]
#[command(name = "gridtext", author, version, about, long_about = None)]
pub struct Cli {
    /// Scenario to print (repeatable; default: all)
    #[arg(long = "scenario", short = 's', value_enum)]
    pub scenarios: Vec<Scenario>,

    /// Output format
    #[arg(long, short = 'f', value_enum, env = "GRIDTEXT_FORMAT", default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print column widths and row heights after each table
    #[arg(long)]
    pub metrics: bool,

    /// Heading printed before the first table
    #[arg(long)]
    pub title: Option<String>,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Effective log level after applying `--verbose`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose && self.log_level < LogLevel::Debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    /// Build the showcase configuration from the parsed arguments.
    pub fn to_config(&self) -> ShowcaseConfig {
        let mut config = ShowcaseConfig::default()
            .with_output_format(self.format)
            .with_metrics(self.metrics);
        for &scenario in &self.scenarios {
            config = config.with_scenario(scenario);
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        config
    }
}
