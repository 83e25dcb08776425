//! The table grid.

use std::fmt;

use crate::content::{CellContent, Content, TableContent};
use crate::error::{Axis, Result, TableError};
use crate::layout::TableLayout;

/// A fixed-size grid of cell contents.
///
/// A table owns every cell outright. Cloning deep-copies the whole grid,
/// including embedded table snapshots, and inserting content or a table
/// into a cell always stores a copy. Two tables are equal when their
/// dimensions match and every pair of cells is equal.
///
/// # Example
///
/// ```
/// use gridtext_core::{Alignment, Content, Table};
///
/// let mut table = Table::new(1, 1);
/// table.set_cell(0, 0, &Content::text("Hi", Alignment::Left))?;
/// assert_eq!(table.render(), "+--+\n|Hi|\n+--+\n");
/// # Ok::<(), gridtext_core::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Content>>,
}

impl Table {
    /// Create a `rows` x `cols` table with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Content::empty(); cols]; rows],
        }
    }

    /// Checked constructor for signed dimensions.
    ///
    /// Negative counts fail with [`TableError::InvalidDimension`]; zero is
    /// allowed and gives an empty grid.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let rows = checked_dimension(Axis::Rows, rows)?;
        let cols = checked_dimension(Axis::Cols, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Number of rows, fixed at construction.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, fixed at construction.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow the cell at (`row`, `col`).
    pub fn get_cell(&self, row: usize, col: usize) -> Result<&Content> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Mutably borrow the cell at (`row`, `col`).
    ///
    /// Use the typed accessors on [`Content`] to reach a specific payload,
    /// e.g. `table.get_cell_mut(0, 0)?.as_text_mut()?.set_text("...")`.
    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Content> {
        self.check_bounds(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// Store a copy of `content` at (`row`, `col`).
    pub fn set_cell(&mut self, row: usize, col: usize, content: &Content) -> Result<()> {
        self.replace(row, col, content.clone())
    }

    /// Store a snapshot of `table` at (`row`, `col`).
    ///
    /// The snapshot is taken now; later changes to `table` do not show up
    /// in this cell.
    pub fn set_table(&mut self, row: usize, col: usize, table: &Table) -> Result<()> {
        self.check_bounds(row, col)?;
        self.replace(row, col, Content::Table(TableContent::new(table)))
    }

    /// Store a snapshot of this table in one of its own cells.
    ///
    /// The snapshot reflects the table as it was before the call, so the
    /// result nests exactly one level deeper each time this is called.
    pub fn embed_self(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        let snapshot = TableContent::new(self);
        self.replace(row, col, Content::Table(snapshot))
    }

    /// Copy the cell at `src` into the cell at `dst`.
    pub fn copy_cell(&mut self, src: (usize, usize), dst: (usize, usize)) -> Result<()> {
        let content = self.get_cell(src.0, src.1)?.clone();
        self.replace(dst.0, dst.1, content)
    }

    /// Measure column widths and row heights.
    pub fn layout(&self) -> TableLayout {
        TableLayout::measure(self)
    }

    /// Render the table into bordered lines without line terminators.
    pub fn render_lines(&self) -> Vec<String> {
        let layout = self.layout();
        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            width = layout.total_width(),
            height = layout.total_height(),
            "rendering table"
        );
        layout.render(self)
    }

    /// Render the table as text, every line newline-terminated.
    pub fn render(&self) -> String {
        let lines = self.render_lines();
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in &lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub(crate) fn grid(&self) -> &[Vec<Content>] {
        &self.cells
    }

    fn replace(&mut self, row: usize, col: usize, content: Content) -> Result<()> {
        self.check_bounds(row, col)?;
        tracing::trace!(row, col, kind = %content.kind(), "replacing cell");
        self.cells[row][col] = content;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            return Ok(());
        }
        tracing::debug!(row, col, rows = self.rows, cols = self.cols, "cell out of range");
        Err(TableError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl CellContent for Table {
    fn width(&self) -> usize {
        self.layout().total_width()
    }

    fn height(&self) -> usize {
        self.layout().total_height()
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        TableContent::new(self).render(height, width)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn checked_dimension(axis: Axis, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        tracing::debug!(%axis, value, "rejected table dimension");
        TableError::InvalidDimension { axis, value }
    })
}
