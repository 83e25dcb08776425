//! Column/row sizing and border rendering.
//!
//! Each axis is sized independently: a column is as wide as its widest
//! cell and a row is as tall as its tallest cell. Nested tables therefore
//! only stretch their own column and row.
//!
//! ```text
//! +------+-----+
//! |Hello,|#### |
//! |Kitty |#  # |
//! +------+-----+
//! ```

use serde::Serialize;

use crate::content::CellContent;
use crate::table::Table;

const CORNER: char = '+';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';

/// Measured column widths and row heights of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    /// Width of every column, excluding borders.
    pub column_widths: Vec<usize>,
    /// Height of every row, excluding borders.
    pub row_heights: Vec<usize>,
}

impl TableLayout {
    /// Measure the natural size of every column and row of `table`.
    pub fn measure(table: &Table) -> Self {
        let mut column_widths = vec![0; table.cols()];
        let mut row_heights = vec![0; table.rows()];

        for (r, row) in table.grid().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                column_widths[c] = column_widths[c].max(cell.width());
                row_heights[r] = row_heights[r].max(cell.height());
            }
        }

        tracing::trace!(?column_widths, ?row_heights, "measured table layout");
        Self {
            column_widths,
            row_heights,
        }
    }

    /// Width of the rendered table including borders.
    pub fn total_width(&self) -> usize {
        1 + self.column_widths.iter().map(|w| w + 1).sum::<usize>()
    }

    /// Number of rendered lines including borders.
    pub fn total_height(&self) -> usize {
        1 + self.row_heights.iter().map(|h| h + 1).sum::<usize>()
    }

    /// The horizontal separator, e.g. `+---+--+`.
    pub fn border_line(&self) -> String {
        let mut line = String::with_capacity(self.total_width());
        line.push(CORNER);
        for &width in &self.column_widths {
            line.extend(std::iter::repeat_n(HORIZONTAL, width));
            line.push(CORNER);
        }
        line
    }

    /// Render `table` into lines using this layout.
    ///
    /// The layout must have been measured from `table`.
    pub(crate) fn render(&self, table: &Table) -> Vec<String> {
        let border = self.border_line();
        let mut out = Vec::with_capacity(self.total_height());
        out.push(border.clone());

        for (row, &height) in table.grid().iter().zip(&self.row_heights) {
            let blocks: Vec<Vec<String>> = row
                .iter()
                .zip(&self.column_widths)
                .map(|(cell, &width)| cell.render(height, width))
                .collect();

            for i in 0..height {
                let mut line = String::with_capacity(border.len());
                line.push(VERTICAL);
                for block in &blocks {
                    line.push_str(&block[i]);
                    line.push(VERTICAL);
                }
                out.push(line);
            }
            out.push(border.clone());
        }

        out
    }
}
