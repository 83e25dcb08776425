//! Aligned multi-line text.

use serde::{Deserialize, Serialize};

use super::CellContent;
use crate::lines::{display_width, fit_left, fit_right, split_lines};

/// Horizontal alignment of text inside its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
}

/// A block of pre-split text lines.
///
/// Lines are never wrapped. When the render box is narrower than a line the
/// line is cut at the box width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextContent {
    lines: Vec<String>,
    alignment: Alignment,
}

impl TextContent {
    /// Create text content, splitting `text` on line breaks.
    pub fn new(text: &str, alignment: Alignment) -> Self {
        Self {
            lines: split_lines(text),
            alignment,
        }
    }

    /// Replace the text, re-splitting it into lines.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
    }

    /// The stored lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Current alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Change the alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl CellContent for TextContent {
    fn width(&self) -> usize {
        self.lines.iter().map(|l| display_width(l)).max().unwrap_or(0)
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        (0..height)
            .map(|i| {
                let line = self.lines.get(i).map_or("", String::as_str);
                match self.alignment {
                    Alignment::Left => fit_left(line, width),
                    Alignment::Right => fit_right(line, width),
                }
            })
            .collect()
    }
}
