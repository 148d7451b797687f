//! # tally-sheets
//!
//! A Rust library for building and aggregating report workbooks.
//!
//! Tally-sheets models a spreadsheet document as a grid of id-addressed
//! cells and provides the "totalize" operations that merge numeric values
//! across structurally compatible workbooks — the core of periodic report
//! consolidation (daily sheets summed into monthly ones, branch reports
//! summed into a regional one, and so on).
//!
//! ## Features
//!
//! - Sparse rows with automatic gap filling
//! - Stable cell ids decoupled from grid positions
//! - `#id#` formula templates resolved to cell addresses for the writer
//! - Structural and id-targeted totalization, and report comparison
//! - Print areas, column widths and opaque style handles for lossless
//!   serialization by an external writer
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let mut sheet = Sheet::new("Totals");
//! let mut row = Row::new();
//! row.push_cell(Cell::with_value("UNITS", 10.0));
//! sheet.add_row(row);
//!
//! let mut report = Workbook::new();
//! report.add_sheet(sheet);
//!
//! let other = report.clone();
//! report.totalize(&other);
//!
//! let cell = report.sheet(0).unwrap().cell(0, 0).unwrap();
//! assert_eq!(cell.value().as_number(), Some(20.0));
//! ```

pub mod prelude;

// Re-export core types
pub use tally_sheets_core::{
    column_index,
    column_letters,
    resolve_formula,
    // Address types
    Address,
    // Cell types
    Cell,
    CellValue,
    // Error types
    Error,
    Font,
    FontHandle,
    PrintArea,
    Result,
    Row,
    Sheet,
    // Style types
    Style,
    StyleHandle,
    StyleRegistry,
    Workbook,
    FILLER_ID,
    ID_SEPARATOR,
    MAX_COLUMN_INDEX,
};
