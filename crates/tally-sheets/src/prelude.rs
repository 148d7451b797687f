//! Prelude module - common imports for tally-sheets users
//!
//! ```rust
//! use tally_sheets::prelude::*;
//! ```

pub use crate::{
    resolve_formula,
    // Address types
    Address,
    // Cell types
    Cell,
    CellValue,
    // Error types
    Error,
    Font,
    PrintArea,
    Result,
    Row,
    Sheet,
    // Style types
    Style,
    Workbook,
};
