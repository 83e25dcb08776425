//! Cell content model.
//!
//! A table cell holds exactly one [`Content`] value. The four variants share
//! the [`CellContent`] contract: report a natural size, and render into a box
//! of any requested size.
//!
//! ```
//! use gridtext_core::{Alignment, CellContent, Content, ImageContent};
//!
//! let text = Content::text("Bye,\nHello Kitty", Alignment::Right);
//! assert_eq!((text.width(), text.height()), (11, 2));
//! assert_eq!(text.render(2, 12), vec!["        Bye,", " Hello Kitty"]);
//!
//! let image: Content = ImageContent::new().with_row("##").with_row("##").into();
//! assert_eq!(image.render(4, 4), vec!["    ", " ## ", " ## ", "    "]);
//! ```

mod empty;
mod image;
mod nested;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::table::Table;

pub use empty::EmptyContent;
pub use image::ImageContent;
pub use nested::TableContent;
pub use text::{Alignment, TextContent};

/// Sizing and rendering contract shared by every kind of cell content.
pub trait CellContent {
    /// Natural width in columns.
    fn width(&self) -> usize;

    /// Natural height in lines.
    fn height(&self) -> usize;

    /// Render into exactly `height` lines of exactly `width` columns.
    ///
    /// Content larger than the box is cropped, smaller content is padded
    /// with spaces.
    fn render(&self, height: usize, width: usize) -> Vec<String>;
}

/// Discriminant of a [`Content`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Blank placeholder.
    Empty,
    /// Aligned multi-line text.
    Text,
    /// Centered ASCII image.
    Image,
    /// Embedded table snapshot.
    Table,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Empty => "empty",
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Table => "table",
        };
        f.write_str(name)
    }
}

/// The value stored in a table cell.
///
/// `Clone` is a deep copy: an embedded table is copied along with every
/// cell it holds. Equality is structural and requires matching variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Blank placeholder with zero natural size.
    Empty(EmptyContent),
    /// Multi-line text aligned left or right.
    Text(TextContent),
    /// ASCII art centered in its box.
    Image(ImageContent),
    /// Frozen snapshot of another table.
    Table(TableContent),
}

impl Default for Content {
    fn default() -> Self {
        Self::Empty(EmptyContent)
    }
}

impl Content {
    /// Blank placeholder content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text content split into lines from `text`.
    pub fn text(text: &str, alignment: Alignment) -> Self {
        Self::Text(TextContent::new(text, alignment))
    }

    /// Image content from its rows.
    pub fn image<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Image(ImageContent::from_rows(rows))
    }

    /// Snapshot of `table`, taken now.
    pub fn table(table: &Table) -> Self {
        Self::Table(TableContent::new(table))
    }

    /// Which variant this is.
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Empty(_) => ContentKind::Empty,
            Content::Text(_) => ContentKind::Text,
            Content::Image(_) => ContentKind::Image,
            Content::Table(_) => ContentKind::Table,
        }
    }

    /// Returns true for the blank placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty(_))
    }

    /// Borrow the text payload.
    pub fn as_text(&self) -> Result<&TextContent> {
        match self {
            Content::Text(text) => Ok(text),
            other => Err(other.mismatch(ContentKind::Text)),
        }
    }

    /// Mutably borrow the text payload.
    pub fn as_text_mut(&mut self) -> Result<&mut TextContent> {
        match self {
            Content::Text(text) => Ok(text),
            other => Err(other.mismatch(ContentKind::Text)),
        }
    }

    /// Borrow the image payload.
    pub fn as_image(&self) -> Result<&ImageContent> {
        match self {
            Content::Image(image) => Ok(image),
            other => Err(other.mismatch(ContentKind::Image)),
        }
    }

    /// Mutably borrow the image payload.
    pub fn as_image_mut(&mut self) -> Result<&mut ImageContent> {
        match self {
            Content::Image(image) => Ok(image),
            other => Err(other.mismatch(ContentKind::Image)),
        }
    }

    /// Borrow the embedded table snapshot. Snapshots are read-only.
    pub fn as_table(&self) -> Result<&TableContent> {
        match self {
            Content::Table(table) => Ok(table),
            other => Err(other.mismatch(ContentKind::Table)),
        }
    }

    fn mismatch(&self, expected: ContentKind) -> TableError {
        let found = self.kind();
        tracing::debug!(%expected, %found, "content variant mismatch");
        TableError::VariantMismatch { expected, found }
    }
}

impl CellContent for Content {
    fn width(&self) -> usize {
        match self {
            Content::Empty(c) => c.width(),
            Content::Text(c) => c.width(),
            Content::Image(c) => c.width(),
            Content::Table(c) => c.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            Content::Empty(c) => c.height(),
            Content::Text(c) => c.height(),
            Content::Image(c) => c.height(),
            Content::Table(c) => c.height(),
        }
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        match self {
            Content::Empty(c) => c.render(height, width),
            Content::Text(c) => c.render(height, width),
            Content::Image(c) => c.render(height, width),
            Content::Table(c) => c.render(height, width),
        }
    }
}

impl From<EmptyContent> for Content {
    fn from(content: EmptyContent) -> Self {
        Content::Empty(content)
    }
}

impl From<TextContent> for Content {
    fn from(content: TextContent) -> Self {
        Content::Text(content)
    }
}

impl From<ImageContent> for Content {
    fn from(content: ImageContent) -> Self {
        Content::Image(content)
    }
}

impl From<TableContent> for Content {
    fn from(content: TableContent) -> Self {
        Content::Table(content)
    }
}

impl From<&Table> for Content {
    fn from(table: &Table) -> Self {
        Content::table(table)
    }
}
