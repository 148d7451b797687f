//! Workbook type - the main document structure and the totalize operation

use log::debug;

use crate::address::{column_index, Address};
use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::print_area::PrintArea;
use crate::sheet::Sheet;
use crate::style::{Font, FontHandle, Style, StyleHandle, StyleRegistry};

/// A workbook: an ordered collection of sheets, a style/font registry and
/// zero or more print areas.
///
/// A workbook is the unit of load/write and the unit of merge. It has no
/// sealed state: it stays mutable after being handed to a writer, and the
/// merge operations can be applied any number of times.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    name: Option<String>,
    sheets: Vec<Sheet>,
    registry: StyleRegistry,
    print_areas: Vec<PrintArea>,
}

impl Workbook {
    /// Create a new empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty workbook with a name
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Get the workbook name, if set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the workbook name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Append a sheet
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Iterate over the sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Iterate over the sheets mutably
    pub fn sheets_mut(&mut self) -> impl Iterator<Item = &mut Sheet> {
        self.sheets.iter_mut()
    }

    /// Attach a print area
    pub fn add_print_area(&mut self, area: PrintArea) {
        self.print_areas.push(area);
    }

    /// The attached print areas
    pub fn print_areas(&self) -> &[PrintArea] {
        &self.print_areas
    }

    /// Register a style, returning a fresh handle.
    ///
    /// Handles are never shared between calls; see
    /// [`StyleRegistry::create_style`].
    pub fn create_style(&mut self, style: Style) -> StyleHandle {
        self.registry.create_style(style)
    }

    /// Register a font, returning a fresh handle
    pub fn create_font(&mut self, font: Font) -> FontHandle {
        self.registry.create_font(font)
    }

    /// The style/font registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.registry
    }

    /// The style/font registry, mutably
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// Stamp positions on every sheet (see [`Sheet::assign_positions`])
    pub fn assign_positions(&mut self) -> Result<()> {
        for sheet in &mut self.sheets {
            sheet.assign_positions()?;
        }
        Ok(())
    }

    /// Find the position of the cell with the given id, scanning sheets in
    /// order and returning the first sheet's match.
    pub fn position_of(&self, id: &str) -> Option<Address> {
        self.sheets.iter().find_map(|sheet| sheet.position_of(id))
    }

    /// Set the content value of the cell at an address on the given sheet.
    ///
    /// Errors on a bad sheet or row index; a column beyond the row's width
    /// is ignored, consistent with the exception-free read paths.
    pub fn set_cell_value<V: Into<CellValue>>(
        &mut self,
        sheet_index: usize,
        address: &Address,
        value: V,
    ) -> Result<()> {
        let sheet_count = self.sheets.len();
        let sheet = self
            .sheets
            .get_mut(sheet_index)
            .ok_or(Error::SheetOutOfBounds(sheet_index, sheet_count))?;

        if address.row == 0 {
            return Err(Error::RowOutOfBounds(0, sheet.row_count()));
        }
        let row_index = address.row as usize - 1;
        let col_index = column_index(&address.column)? as usize - 1;

        let row_count = sheet.row_count();
        let row = sheet
            .row_mut(row_index)
            .ok_or(Error::RowOutOfBounds(row_index, row_count))?;

        if let Some(cell) = row.get_mut(col_index) {
            cell.set_value(value);
        }
        Ok(())
    }

    /// Merge another workbook into this one by summing numeric cells in
    /// lock-step grid order.
    ///
    /// For each (sheet, row, cell) position present in both workbooks, when
    /// both cells hold numeric content this workbook's cell becomes the sum.
    /// Non-numeric or missing cells on either side are left untouched; a
    /// shape mismatch means "nothing to add", never an error, and the walk
    /// truncates to the shorter of each dimension.
    ///
    /// The operation accumulates in place: totalizing with the same workbook
    /// twice adds its values twice. Totalize from a clone when the original
    /// must be preserved.
    pub fn totalize(&mut self, other: &Workbook) {
        debug!("totalize: {} sheet(s) into {}", other.sheet_count(), self.sheet_count());

        for (sheet, other_sheet) in self.sheets.iter_mut().zip(other.sheets.iter()) {
            for (row, other_row) in sheet.rows_mut().zip(other_sheet.rows()) {
                for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                    if let (Some(own), Some(added)) =
                        (cell.value().as_number(), other_cell.value().as_number())
                    {
                        cell.set_value(CellValue::Number(own + added));
                    }
                }
            }
        }
    }

    /// Merge a single cell id across both workbooks.
    ///
    /// Every cell in `other` whose id matches contributes its numeric value
    /// to a running sum; every matching numeric cell in this workbook is
    /// then replaced by its own value plus that sum. When an id occurs
    /// several times here (say, once per sheet) each occurrence accumulates
    /// the full sum independently — fan-out, not pairing.
    ///
    /// No numeric match on either side leaves everything unchanged.
    pub fn totalize_by_id(&mut self, other: &Workbook, id: &str) {
        let mut sum = None;
        for sheet in other.sheets() {
            for row in sheet.rows() {
                for cell in row.iter() {
                    if cell.id() == id {
                        if let Some(n) = cell.value().as_number() {
                            sum = Some(sum.unwrap_or(0.0) + n);
                        }
                    }
                }
            }
        }

        let Some(sum) = sum else {
            debug!("totalize_by_id: no numeric cell with id {:?} in source", id);
            return;
        };

        for sheet in &mut self.sheets {
            for row in sheet.rows_mut() {
                for cell in row.iter_mut() {
                    if cell.id() == id {
                        if let Some(own) = cell.value().as_number() {
                            cell.set_value(CellValue::Number(own + sum));
                        }
                    }
                }
            }
        }
    }

    /// Subtract another workbook from this one in lock-step grid order.
    ///
    /// The positional counterpart of [`Workbook::totalize`] for report
    /// comparison: numeric pairs become `self - other`, and an empty cell
    /// here facing a numeric cell there takes the negated value. Everything
    /// else is left untouched.
    pub fn compare(&mut self, other: &Workbook) {
        debug!("compare: {} sheet(s) against {}", other.sheet_count(), self.sheet_count());

        for (sheet, other_sheet) in self.sheets.iter_mut().zip(other.sheets.iter()) {
            for (row, other_row) in sheet.rows_mut().zip(other_sheet.rows()) {
                for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                    match (cell.value().as_number(), other_cell.value().as_number()) {
                        (Some(own), Some(subtracted)) => {
                            cell.set_value(CellValue::Number(own - subtracted));
                        }
                        (None, Some(subtracted)) if cell.value().is_empty() => {
                            cell.set_value(CellValue::Number(-subtracted));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

impl PartialEq for Workbook {
    /// Workbooks compare by shape and cell content: same sheet count and
    /// pairwise-equal sheets.
    fn eq(&self, other: &Self) -> bool {
        self.sheets == other.sheets
    }
}
