//! Configuration for showcase output.
//!
//! This module provides the types that control which showcase tables are
//! printed and how they are formatted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::showcase::Scenario;

/// Output format for rendered tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Raw table text
    #[default]
    Plain,

    /// Markdown with fenced text blocks
    Markdown,

    /// JSON for programmatic access
    Json,
}

/// Configuration for a showcase run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Scenarios to print, in order (empty = all)
    pub scenarios: Vec<Scenario>,

    /// Output format
    pub output_format: OutputFormat,

    /// Print column widths and row heights after each table
    pub show_metrics: bool,

    /// Heading printed before the first table
    pub title: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            scenarios: Vec::new(),
            output_format: OutputFormat::Plain,
            show_metrics: false,
            title: None,
        }
    }
}

impl ShowcaseConfig {
    /// Builder: print only `scenario` (may be called repeatedly).
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Builder: set output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Builder: enable/disable layout metrics.
    pub fn with_metrics(mut self, show: bool) -> Self {
        self.show_metrics = show;
        self
    }

    /// Builder: set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The scenarios this run prints.
    pub fn selected_scenarios(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            Scenario::ALL.to_vec()
        } else {
            self.scenarios.clone()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario) {
                return Err(format!("Scenario '{}' requested more than once", scenario.name()));
            }
        }
        Ok(())
    }
}
