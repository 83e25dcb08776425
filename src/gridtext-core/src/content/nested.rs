//! Tables embedded as cell content.

use once_cell::sync::OnceCell;

use super::CellContent;
use crate::lines::{blank, block_size, fit_left, split_lines};
use crate::table::Table;

/// A frozen snapshot of a table placed inside another table's cell.
///
/// The snapshot is an independent deep copy taken when the content is
/// created, so later changes to the source table are never visible here.
/// Because a snapshot cannot change, its rendered text is computed once and
/// reused for sizing and rendering.
#[derive(Debug, Clone)]
pub struct TableContent {
    table: Table,
    rendered: OnceCell<RenderedBlock>,
}

#[derive(Debug, Clone)]
struct RenderedBlock {
    lines: Vec<String>,
    width: usize,
    height: usize,
}

impl TableContent {
    /// Take a snapshot of `table`.
    pub fn new(table: &Table) -> Self {
        tracing::debug!(
            rows = table.rows(),
            cols = table.cols(),
            "snapshotting table for embedding"
        );
        Self {
            table: table.clone(),
            rendered: OnceCell::new(),
        }
    }

    /// The embedded snapshot.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Rendered lines of the snapshot, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.rendered().lines
    }

    fn rendered(&self) -> &RenderedBlock {
        self.rendered.get_or_init(|| {
            let text = self.table.render();
            let (width, height) = block_size(&text);
            tracing::trace!(width, height, "materialized nested table render");
            RenderedBlock {
                lines: split_lines(&text),
                width,
                height,
            }
        })
    }
}

impl PartialEq for TableContent {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for TableContent {}

impl CellContent for TableContent {
    fn width(&self) -> usize {
        self.rendered().width
    }

    fn height(&self) -> usize {
        self.rendered().height
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        let lines = self.lines();
        (0..height)
            .map(|i| match lines.get(i) {
                Some(line) => fit_left(line, width),
                None => blank(width),
            })
            .collect()
    }
}
