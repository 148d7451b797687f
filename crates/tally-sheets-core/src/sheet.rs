//! Sheet type: a named ordered sequence of rows

use ahash::AHashMap;

use crate::address::{column_letters, Address};
use crate::cell::Cell;
use crate::error::Result;
use crate::row::Row;

/// A named sheet of rows, plus column width hints.
///
/// Rows are not forced to the same width; readers treat narrower rows as
/// padded with blanks. Cell ids are not required to be unique within a
/// sheet — duplicates are tolerated and resolved by the merge algorithms.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
    /// Column index -> width override, in writer units
    column_widths: AHashMap<u16, u16>,
    default_column_width: Option<u16>,
    /// id -> position index rebuilt by [`Sheet::assign_positions`]
    #[cfg_attr(feature = "serde", serde(skip))]
    id_index: AHashMap<String, Address>,
}

impl Sheet {
    /// Create an empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Append a row
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Iterate over the rows mutably
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.rows.iter_mut()
    }

    /// Borrow the cell at (row, col), if present
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Record a width override for a column
    pub fn set_column_width(&mut self, column: u16, width: u16) {
        self.column_widths.insert(column, width);
    }

    /// Get the width override for a column, if any
    pub fn column_width(&self, column: u16) -> Option<u16> {
        self.column_widths.get(&column).copied()
    }

    /// Enumerate all column width overrides
    pub fn column_widths(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }

    /// Get the default column width, if set
    pub fn default_column_width(&self) -> Option<u16> {
        self.default_column_width
    }

    /// Set the default column width (None = writer default)
    pub fn set_default_column_width(&mut self, width: Option<u16>) {
        self.default_column_width = width;
    }

    /// Stamp every real cell with its grid position and rebuild the id
    /// lookup index.
    ///
    /// Filler cells are skipped. A duplicate id keeps the last position
    /// written to the index; no uniqueness is enforced.
    ///
    /// Fails only when a row is wide enough that a column cannot be
    /// expressed with two letters.
    pub fn assign_positions(&mut self) -> Result<()> {
        self.id_index.clear();

        for (row_index, row) in self.rows.iter_mut().enumerate() {
            for (col_index, cell) in row.iter_mut().enumerate() {
                if cell.is_filler() {
                    continue;
                }
                let address = Address::new(row_index as u32 + 1, column_letters(col_index as u32)?);
                cell.set_position(Some(address.clone()));
                self.id_index.insert(cell.id().to_string(), address);
            }
        }

        Ok(())
    }

    /// Find the position of the cell with the given id.
    ///
    /// Checks the index built by [`Sheet::assign_positions`] first, then
    /// falls back to a linear scan of the grid (last match wins, matching
    /// the index semantics for duplicate ids).
    pub fn position_of(&self, id: &str) -> Option<Address> {
        if let Some(address) = self.id_index.get(id) {
            return Some(address.clone());
        }

        let mut found = None;
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                if cell.id() == id {
                    if let Ok(address) = Address::from_indices(row_index, col_index) {
                        found = Some(address);
                    }
                }
            }
        }
        found
    }
}

impl PartialEq for Sheet {
    /// Sheets compare by grid content: same row count, pairwise-equal rows.
    /// Names and width hints do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use pretty_assertions::assert_eq;

    fn sheet_with_grid() -> Sheet {
        let mut sheet = Sheet::new("Report");

        let mut header = Row::new();
        header.push_cell(Cell::with_value("TITLE", "Monthly totals"));
        sheet.add_row(header);

        let mut data = Row::new();
        data.push_cell(Cell::with_value("UNITS", 12.0));
        data.insert_cell(2, Cell::with_value("REVENUE", 340.5));
        sheet.add_row(data);

        sheet
    }

    #[test]
    fn test_assign_positions_skips_fillers() {
        let mut sheet = sheet_with_grid();
        sheet.assign_positions().unwrap();

        assert_eq!(sheet.position_of("TITLE"), Some(Address::new(1, "A")));
        assert_eq!(sheet.position_of("UNITS"), Some(Address::new(2, "A")));
        assert_eq!(sheet.position_of("REVENUE"), Some(Address::new(2, "C")));

        // The filler between UNITS and REVENUE carries no position
        let filler = sheet.cell(1, 1).unwrap();
        assert!(filler.is_filler());
        assert!(filler.position().is_none());
    }

    #[test]
    fn test_position_of_falls_back_to_scan() {
        // Without assign_positions the index is empty, the scan still finds it
        let sheet = sheet_with_grid();
        assert_eq!(sheet.position_of("REVENUE"), Some(Address::new(2, "C")));
        assert_eq!(sheet.position_of("MISSING"), None);
    }

    #[test]
    fn test_duplicate_id_keeps_last_position() {
        let mut sheet = Sheet::new("Dup");
        let mut first = Row::new();
        first.push_cell(Cell::with_value("TOTAL", 1.0));
        sheet.add_row(first);
        let mut second = Row::new();
        second.push_cell(Cell::with_value("TOTAL", 2.0));
        sheet.add_row(second);

        sheet.assign_positions().unwrap();
        assert_eq!(sheet.position_of("TOTAL"), Some(Address::new(2, "A")));
    }

    #[test]
    fn test_column_widths() {
        let mut sheet = Sheet::new("Widths");
        sheet.set_column_width(0, 4200);
        sheet.set_column_width(3, 2100);
        sheet.set_default_column_width(Some(2000));

        assert_eq!(sheet.column_width(0), Some(4200));
        assert_eq!(sheet.column_width(1), None);
        assert_eq!(sheet.column_widths().count(), 2);
        assert_eq!(sheet.default_column_width(), Some(2000));
    }

    #[test]
    fn test_content_equality_ignores_name() {
        let mut a = Sheet::new("A");
        let mut b = Sheet::new("B");

        let mut row = Row::new();
        row.push_cell(Cell::with_value("X", 5.0));
        a.add_row(row.clone());
        b.add_row(row);

        assert_eq!(a, b);

        b.add_row(Row::new());
        assert_ne!(a, b);
    }

    #[test]
    fn test_cell_value_round_trip() {
        let sheet = sheet_with_grid();
        assert_eq!(
            sheet.cell(1, 2).unwrap().value(),
            &CellValue::Number(340.5)
        );
        assert!(sheet.cell(9, 9).is_none());
    }
}
