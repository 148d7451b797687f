//! Row type: an ordered, gap-filling sequence of cells

use crate::cell::Cell;
use log::warn;

/// A row of cells.
///
/// Rows keep no index gaps: inserting at a position beyond the current
/// length pads the intermediate slots with filler cells (distinct instances
/// sharing the [`FILLER_ID`](crate::cell::FILLER_ID) sentinel).
///
/// Equality compares length and pairwise cell content; row height is not
/// part of the comparison.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    cells: Vec<Cell>,
    height_in_points: Option<f32>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with capacity for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            height_in_points: None,
        }
    }

    /// Insert a cell at the given position.
    ///
    /// Positions beyond the current length are reached by padding the gap
    /// with filler cells first; positions within bounds shift the existing
    /// cells right.
    pub fn insert_cell(&mut self, position: usize, cell: Cell) {
        while self.cells.len() < position {
            self.cells.push(Cell::filler());
        }
        self.cells.insert(position, cell);
    }

    /// Append a cell at the end of the row
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the cell at `index`, or a fresh empty cell when out of bounds.
    ///
    /// Read paths never fail: presentation-layer callers probe arbitrary
    /// positions and expect a blank rather than an error.
    pub fn cell(&self, index: usize) -> Cell {
        match self.cells.get(index) {
            Some(cell) => cell.clone(),
            None => {
                warn!(
                    "cell index {} is beyond the row (len {}), returning an empty cell",
                    index,
                    self.cells.len()
                );
                Cell::default()
            }
        }
    }

    /// Borrow the cell at `index`
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mutably borrow the cell at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Replace the cell at `index` in place.
    ///
    /// Silently ignored when `index` is out of bounds; the row never grows
    /// through this method.
    pub fn set_cell(&mut self, index: usize, cell: Cell) {
        if index < self.cells.len() {
            self.cells[index] = cell;
        }
    }

    /// Number of cells in the row (fillers included)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the cells mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// The cells as a slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the custom row height in points, if set
    pub fn height_in_points(&self) -> Option<f32> {
        self.height_in_points
    }

    /// Set the row height in points (None = writer default)
    pub fn set_height_in_points(&mut self, height: Option<f32>) {
        self.height_in_points = height;
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
