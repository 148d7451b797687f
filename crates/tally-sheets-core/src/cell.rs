//! Cell value and cell types

use crate::address::Address;
use crate::style::StyleHandle;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reserved id shared by every filler cell.
///
/// Filler cells pad the gaps a sparse [`Row`](crate::row::Row) insert leaves
/// behind. They are never treated as real content: position assignment and
/// the binary writer skip them, and merges never match them by id.
pub const FILLER_ID: &str = "__FILLER__";

/// Counter backing the generated ids of cells created without one.
static NEXT_ANONYMOUS_ID: AtomicU64 = AtomicU64::new(0);

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Boolean value
    Bool(bool),

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// Text value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number.
    ///
    /// Only [`CellValue::Number`] qualifies; booleans and numeric-looking
    /// text do not participate in totalization.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// A single addressable cell.
///
/// A cell's identity for merge and formula purposes is its `id`, a stable
/// caller-assigned token independent of where the cell sits in the grid.
/// Cells created without an explicit id receive a generated unique one.
///
/// Equality compares **content values only**: ids, spans, styles and formula
/// templates do not participate. This is what row and sheet structural
/// comparison is built on.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    id: String,
    value: CellValue,
    formula: Option<String>,
    row_span: u32,
    col_span: u16,
    style: Option<StyleHandle>,
    /// Grid coordinate stamped by `Sheet::assign_positions`
    position: Option<Address>,
}

impl Cell {
    /// Create an empty cell with the given id
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            value: CellValue::Empty,
            formula: None,
            row_span: 1,
            col_span: 1,
            style: None,
            position: None,
        }
    }

    /// Create a cell with the given id and value
    pub fn with_value<S: Into<String>, V: Into<CellValue>>(id: S, value: V) -> Self {
        let mut cell = Cell::new(id);
        cell.value = value.into();
        cell
    }

    /// Create an empty cell with a generated unique id
    pub fn anonymous() -> Self {
        let n = NEXT_ANONYMOUS_ID.fetch_add(1, Ordering::Relaxed);
        Cell::new(format!("__CELL_{}__", n))
    }

    /// Create a filler cell used to pad row gaps.
    ///
    /// Every filler is a distinct instance but all share [`FILLER_ID`].
    pub fn filler() -> Self {
        Cell::new(FILLER_ID)
    }

    /// Get the cell id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is a gap-padding filler cell
    pub fn is_filler(&self) -> bool {
        self.id == FILLER_ID
    }

    /// Get the content value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Set the content value
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        self.value = value.into();
    }

    /// Get the formula template, if any
    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// Set the formula template.
    ///
    /// The template may contain `#id#` tokens; the cell stores it verbatim
    /// and never evaluates it. Resolution happens in
    /// [`resolve_formula`](crate::template::resolve_formula) on behalf of
    /// the binary writer.
    pub fn set_formula<S: Into<String>>(&mut self, template: S) {
        self.formula = Some(template.into());
    }

    /// Get the merged-region row span (default 1)
    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    /// Set the merged-region row span
    pub fn set_row_span(&mut self, row_span: u32) {
        self.row_span = row_span;
    }

    /// Get the merged-region column span (default 1)
    pub fn col_span(&self) -> u16 {
        self.col_span
    }

    /// Set the merged-region column span
    pub fn set_col_span(&mut self, col_span: u16) {
        self.col_span = col_span;
    }

    /// Get the style handle, if any
    pub fn style(&self) -> Option<StyleHandle> {
        self.style
    }

    /// Set the style handle
    pub fn set_style(&mut self, style: Option<StyleHandle>) {
        self.style = style;
    }

    /// Get the grid position stamped by the owning sheet, if assigned
    pub fn position(&self) -> Option<&Address> {
        self.position.as_ref()
    }

    pub(crate) fn set_position(&mut self, position: Option<Address>) {
        self.position = position;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::anonymous()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell[{}]={}", self.id, self.value)
    }
}
