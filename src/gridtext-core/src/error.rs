//! Error types for table construction and cell access.

use std::fmt;

use thiserror::Error;

use crate::content::ContentKind;

/// Which grid dimension a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row count / row index.
    Rows,
    /// Column count / column index.
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Cols => f.write_str("cols"),
        }
    }
}

/// Error type for table operations.
///
/// Every variant is a contract violation by the caller. Operations that
/// return one of these leave the table untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A negative row or column count was requested.
    #[error("invalid dimension: {axis} = {value}")]
    InvalidDimension {
        /// The offending axis.
        axis: Axis,
        /// The value that was passed.
        value: i64,
    },

    /// A cell coordinate lies outside the grid.
    #[error("cell ({row}, {col}) out of range for {rows}x{cols} table")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the table.
        rows: usize,
        /// Column count of the table.
        cols: usize,
    },

    /// A typed accessor was used on a cell holding another variant.
    #[error("expected {expected} content, found {found}")]
    VariantMismatch {
        /// The variant the caller asked for.
        expected: ContentKind,
        /// The variant actually stored.
        found: ContentKind,
    },
}

/// Result type alias using [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;
