//! Showcase front-end for `gridtext-core`.
//!
//! Builds the built-in [`showcase::Scenario`] tables and prints them as
//! plain text, Markdown or JSON. Nothing is read from disk.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod showcase;

use std::io::Write;

use anyhow::{Context, Result};

pub use config::{OutputFormat, ShowcaseConfig};
pub use showcase::Scenario;

/// Render the configured scenarios and write them to `out`.
pub fn run(config: &ShowcaseConfig, out: &mut impl Write) -> Result<()> {
    let tables = output::render_scenarios(config)?;
    let text = output::format_output(config, &tables)?;
    out.write_all(text.as_bytes())
        .context("failed to write showcase output")?;
    out.flush().context("failed to flush showcase output")
}
