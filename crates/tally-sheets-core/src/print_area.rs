//! Print area type

/// A declarative rectangular output region bound to one sheet.
///
/// Purely descriptive: the binary writer applies it at serialization time.
/// All bounds are optional pending assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintArea {
    /// Index of the sheet the area applies to
    pub sheet_index: Option<usize>,
    /// First column (0-based, inclusive)
    pub start_column: Option<u16>,
    /// Last column (0-based, inclusive)
    pub end_column: Option<u16>,
    /// First row (0-based, inclusive)
    pub start_row: Option<u32>,
    /// Last row (0-based, inclusive)
    pub end_row: Option<u32>,
}

impl PrintArea {
    /// Create an empty print area with no bounds assigned
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fully specified print area
    pub fn bounded(
        sheet_index: usize,
        start_column: u16,
        end_column: u16,
        start_row: u32,
        end_row: u32,
    ) -> Self {
        Self {
            sheet_index: Some(sheet_index),
            start_column: Some(start_column),
            end_column: Some(end_column),
            start_row: Some(start_row),
            end_row: Some(end_row),
        }
    }

    /// Set the sheet index
    pub fn with_sheet_index(mut self, sheet_index: usize) -> Self {
        self.sheet_index = Some(sheet_index);
        self
    }

    /// Set the column bounds (inclusive)
    pub fn with_columns(mut self, start: u16, end: u16) -> Self {
        self.start_column = Some(start);
        self.end_column = Some(end);
        self
    }

    /// Set the row bounds (inclusive)
    pub fn with_rows(mut self, start: u32, end: u32) -> Self {
        self.start_row = Some(start);
        self.end_row = Some(end);
        self
    }

    /// Whether every bound has been assigned
    pub fn is_complete(&self) -> bool {
        self.sheet_index.is_some()
            && self.start_column.is_some()
            && self.end_column.is_some()
            && self.start_row.is_some()
            && self.end_row.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let area = PrintArea::new()
            .with_sheet_index(0)
            .with_columns(0, 5)
            .with_rows(0, 40);

        assert!(area.is_complete());
        assert_eq!(area.end_column, Some(5));
        assert_eq!(area, PrintArea::bounded(0, 0, 5, 0, 40));
    }

    #[test]
    fn test_incomplete() {
        let area = PrintArea::new().with_sheet_index(1);
        assert!(!area.is_complete());
        assert_eq!(area.start_row, None);
    }
}
