//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::style::{Style, StyleId, StylePool};
use crate::{MAX_COLS, MAX_ROWS};

/// Default column width in character units
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// A worksheet (single sheet in a workbook)
///
/// Cells are kept sparse and ordered row-major, which is the order the
/// serializer needs them in.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Populated cells keyed by (row, col)
    cells: BTreeMap<(u32, u16), CellData>,
    /// Styles referenced by this sheet's cells
    styles: StylePool,
    /// Columns with an explicit width
    column_widths: BTreeMap<u16, f64>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            styles: StylePool::new(),
            column_widths: BTreeMap::new(),
        }
    }

    /// Get the worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the worksheet name (validation happens at the workbook level)
    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get cell data by address string
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get cell data by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(&(row, col))
    }

    /// Get a cell value by address string
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get a cell value by row and column indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Get the resolved style of a cell, if it has a non-default one
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        self.cell_at(row, col)
            .filter(|c| !c.style.is_default())
            .and_then(|c| self.styles.get(c.style))
    }

    /// Number of populated (valued or styled) cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over populated cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &CellData)> {
        self.cells
            .iter()
            .map(|(&(row, col), data)| (CellAddress::new(row, col), data))
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices, keeping any existing style
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells
            .entry((row, col))
            .or_insert_with(|| CellData::new(CellValue::Absent))
            .value = value.into();
        Ok(())
    }

    // === Styles ===

    /// Intern a style in this sheet's pool and return its handle
    pub fn register_style(&mut self, style: Style) -> StyleId {
        self.styles.get_or_insert(style)
    }

    /// Look up a registered style
    pub fn style_by_id(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id)
    }

    /// The style pool backing this sheet
    pub fn styles(&self) -> &StylePool {
        &self.styles
    }

    /// Apply one style handle to every cell of a range
    ///
    /// Cells without a value are created so the style is still rendered.
    pub fn set_range_style(&mut self, range: &CellRange, style: StyleId) -> Result<()> {
        if self.styles.get(style).is_none() {
            return Err(Error::InvalidStyle(format!(
                "style handle {} is not registered on sheet '{}'",
                style.index(),
                self.name
            )));
        }
        self.validate_cell_position(range.end.row, range.end.col)?;

        for addr in range.cells() {
            self.cells
                .entry((addr.row, addr.col))
                .or_insert_with(|| CellData::new(CellValue::Absent))
                .style = style;
        }
        Ok(())
    }

    // === Columns ===

    /// Get a column's width
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Set a column's width in character units
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Columns with an explicit width, ordered by index
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    // === Ranges ===

    /// Get the used range (bounds of all populated cells)
    pub fn used_range(&self) -> Option<CellRange> {
        let (&(first_row, _), _) = self.cells.first_key_value()?;
        let (&(last_row, _), _) = self.cells.last_key_value()?;
        let min_col = self.cells.keys().map(|&(_, c)| c).min()?;
        let max_col = self.cells.keys().map(|&(_, c)| c).max()?;

        Some(CellRange::from_indices(first_row, min_col, last_row, max_col))
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as usize, MAX_COLS - 1));
        }
        Ok(())
    }
}
