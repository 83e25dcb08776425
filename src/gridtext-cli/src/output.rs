//! Formatting of rendered showcase tables.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use gridtext_core::TableLayout;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{OutputFormat, ShowcaseConfig};
use crate::showcase::Scenario;

/// One rendered scenario.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedTable {
    pub scenario: Scenario,
    pub rows: usize,
    pub cols: usize,
    pub layout: TableLayout,
    pub lines: Vec<String>,
}

/// Build and render every scenario selected by `config`.
pub fn render_scenarios(config: &ShowcaseConfig) -> Result<Vec<RenderedTable>> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid showcase configuration: {}", e))?;

    config
        .selected_scenarios()
        .into_iter()
        .map(|scenario| {
            let table = scenario
                .build()
                .with_context(|| format!("failed to build scenario '{}'", scenario.name()))?;
            let layout = table.layout();
            debug!(
                scenario = scenario.name(),
                width = layout.total_width(),
                height = layout.total_height(),
                "rendered scenario"
            );
            Ok(RenderedTable {
                scenario,
                rows: table.rows(),
                cols: table.cols(),
                lines: table.render_lines(),
                layout,
            })
        })
        .collect()
}

/// Format rendered tables according to the configured output format.
pub fn format_output(config: &ShowcaseConfig, tables: &[RenderedTable]) -> Result<String> {
    info!(
        tables = tables.len(),
        format = ?config.output_format,
        "formatting showcase output"
    );
    match config.output_format {
        OutputFormat::Plain => Ok(format_plain(config, tables)),
        OutputFormat::Markdown => Ok(format_markdown(config, tables)),
        OutputFormat::Json => format_json(config, tables),
    }
}

fn format_plain(config: &ShowcaseConfig, tables: &[RenderedTable]) -> String {
    let mut out = String::new();
    if let Some(title) = &config.title {
        let _ = writeln!(out, "{}\n", title);
    }
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in &table.lines {
            let _ = writeln!(out, "{}", line);
        }
        if config.show_metrics {
            push_metrics(&mut out, &table.layout);
        }
    }
    out
}

fn format_markdown(config: &ShowcaseConfig, tables: &[RenderedTable]) -> String {
    let mut out = String::new();
    if let Some(title) = &config.title {
        let _ = writeln!(out, "# {}\n", title);
    }
    for table in tables {
        let _ = writeln!(
            out,
            "## {} ({}x{})\n",
            table.scenario.name(),
            table.rows,
            table.cols
        );
        out.push_str("```text\n");
        for line in &table.lines {
            let _ = writeln!(out, "{}", line);
        }
        out.push_str("```\n\n");
        if config.show_metrics {
            push_metrics(&mut out, &table.layout);
            out.push('\n');
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: Option<&'a str>,
    tables: &'a [RenderedTable],
}

fn format_json(config: &ShowcaseConfig, tables: &[RenderedTable]) -> Result<String> {
    let report = JsonReport {
        title: config.title.as_deref(),
        tables,
    };
    let mut json = serde_json::to_string_pretty(&report).context("failed to serialize tables")?;
    json.push('\n');
    Ok(json)
}

fn push_metrics(out: &mut String, layout: &TableLayout) {
    let _ = writeln!(out, "column widths: {:?}", layout.column_widths);
    let _ = writeln!(out, "row heights:   {:?}", layout.row_heights);
}
