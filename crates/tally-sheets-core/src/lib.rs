//! # tally-sheets-core
//!
//! Core data structures for the tally-sheets report workbook library.
//!
//! This crate provides the in-memory grid model used to build and aggregate
//! reports:
//! - [`CellValue`] and [`Cell`] - id-addressed cells (text, numbers, formulas)
//! - [`Row`] - gap-filling ordered cell sequences
//! - [`Sheet`] and [`Workbook`] - the document structure and the totalize
//!   merge operations
//! - [`Address`] - column-letter coordinates for the external binary writer
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::{Cell, Row, Sheet, Workbook};
//!
//! let mut sheet = Sheet::new("Totals");
//! let mut row = Row::new();
//! row.push_cell(Cell::with_value("UNITS", 12.0));
//! row.push_cell(Cell::with_value("REVENUE", 340.5));
//! sheet.add_row(row);
//!
//! let mut quarter1 = Workbook::new();
//! quarter1.add_sheet(sheet);
//!
//! // Aggregate another structurally compatible report into this one
//! let quarter2 = quarter1.clone();
//! quarter1.totalize(&quarter2);
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod print_area;
pub mod row;
pub mod sheet;
pub mod style;
pub mod template;
pub mod workbook;

// Re-exports for convenience
pub use address::{column_index, column_letters, Address, MAX_COLUMN_INDEX};
pub use cell::{Cell, CellValue, FILLER_ID};
pub use error::{Error, Result};
pub use print_area::PrintArea;
pub use row::Row;
pub use sheet::Sheet;
pub use style::{Font, FontHandle, Style, StyleHandle, StyleRegistry};
pub use template::{resolve_formula, ID_SEPARATOR};
pub use workbook::Workbook;
