//! ASCII images centered on a blank canvas.

use super::CellContent;
use crate::lines::{blank, display_width, truncate};

/// Rows of ASCII art.
///
/// The natural width is the width of the first row. When rendered, the
/// image is centered in the box; rows or columns that fall outside the box
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImageContent {
    rows: Vec<String>,
}

impl ImageContent {
    /// An image with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an image from its rows.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder: append a row.
    pub fn with_row(mut self, row: impl Into<String>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Append a row in place.
    pub fn push_row(&mut self, row: impl Into<String>) -> &mut Self {
        self.rows.push(row.into());
        self
    }

    /// The stored rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl CellContent for ImageContent {
    fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| display_width(row))
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        let mut canvas = vec![blank(width); height];
        if self.rows.is_empty() || height == 0 || width == 0 {
            return canvas;
        }

        let offset_y = height.saturating_sub(self.height()) / 2;
        let offset_x = width.saturating_sub(self.width()) / 2;
        let room = width - offset_x;

        for (line, row) in canvas[offset_y..].iter_mut().zip(&self.rows) {
            let visible = truncate(row, room);
            let used = offset_x + display_width(visible);
            let mut composed = String::with_capacity(width);
            composed.push_str(&line[..offset_x]);
            composed.push_str(visible);
            composed.push_str(&line[used..]);
            *line = composed;
        }

        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> ImageContent {
        ImageContent::new()
            .with_row("###   ")
            .with_row("#  #  ")
            .with_row("###  #")
    }

    #[test]
    fn test_natural_size_uses_first_row() {
        let image = ImageContent::from_rows(["ab", "abcdef"]);
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(ImageContent::new().width(), 0);
    }

    #[test]
    fn test_render_at_natural_size_is_identity() {
        let image = logo();
        assert_eq!(image.render(3, 6), image.rows().to_vec());
    }

    #[test]
    fn test_render_centers_in_larger_box() {
        let image = logo();
        assert_eq!(
            image.render(6, 10),
            vec![
                "          ",
                "  ###     ",
                "  #  #    ",
                "  ###  #  ",
                "          ",
                "          ",
            ]
        );
    }

    #[test]
    fn test_render_crops_in_smaller_box() {
        let image = logo();
        assert_eq!(image.render(2, 4), vec!["### ", "#  #"]);
    }

    #[test]
    fn test_render_longer_row_is_cut_at_box_edge() {
        let image = ImageContent::from_rows(["ab", "abcdef"]);
        assert_eq!(image.render(2, 4), vec![" ab ", " abc"]);
    }

    #[test]
    fn test_render_empty_image() {
        assert_eq!(ImageContent::new().render(2, 2), vec!["  ", "  "]);
        assert!(logo().render(0, 4).is_empty());
        assert_eq!(logo().render(2, 0), vec!["", ""]);
    }

    #[test]
    fn test_push_row_and_equality() {
        let mut a = ImageContent::new();
        a.push_row("**").push_row("* ");
        let b = ImageContent::from_rows(["**", "* "]);
        assert_eq!(a, b);

        a.push_row("  ");
        assert_ne!(a, b);
    }
}
