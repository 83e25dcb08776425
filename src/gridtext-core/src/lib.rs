//! Bordered text tables with heterogeneous, nestable cells.
//!
//! This crate provides:
//!
//! - [`content`]: the cell content model (empty, text, image, embedded table)
//! - [`table`]: the fixed-size grid with deep-copy value semantics
//! - [`layout`]: column/row sizing and border rendering
//! - [`lines`]: line splitting and fixed-width fitting helpers
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use gridtext_core::{Alignment, Content, ImageContent, Table};
//!
//! let mut inner = Table::new(1, 2);
//! inner.set_cell(0, 0, &Content::text("OOP", Alignment::Left))?;
//! inner.set_cell(0, 1, &ImageContent::new().with_row("#").into())?;
//!
//! let mut outer = Table::new(1, 2);
//! outer.set_table(0, 0, &inner)?;
//! outer.set_cell(0, 1, &Content::text("Bye,", Alignment::Right))?;
//!
//! assert_eq!(
//!     outer.render(),
//!     "+-------+----+\n\
//!      |+---+-+|Bye,|\n\
//!      ||OOP|#||    |\n\
//!      |+---+-+|    |\n\
//!      +-------+----+\n"
//! );
//! # Ok::<(), gridtext_core::TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod content;
pub mod error;
pub mod layout;
pub mod lines;
pub mod table;

pub use content::{
    Alignment, CellContent, Content, ContentKind, EmptyContent, ImageContent, TableContent,
    TextContent,
};
pub use error::{Axis, Result, TableError};
pub use layout::TableLayout;
pub use table::Table;
