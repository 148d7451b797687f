//! Error types for tally-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Column letter string is empty, too long, or contains a non-letter
    #[error("Invalid column letters: {0}")]
    InvalidColumn(String),

    /// Column index cannot be expressed with at most two letters
    #[error("Column index {0} out of range (max: {1})")]
    ColumnOutOfRange(u32, u32),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (count: {1})")]
    RowOutOfBounds(usize, usize),

    /// A formula template opened a '#' id token without closing it
    #[error("Unterminated '#' token in formula: {0}")]
    UnterminatedToken(String),
}
