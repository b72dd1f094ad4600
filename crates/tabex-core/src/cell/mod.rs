//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellData`] - A cell's value together with its style handle

mod address;
mod value;

pub use address::{column_index, column_letters, CellAddress, CellRange};
pub use value::CellValue;

use crate::style::StyleId;

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Handle into the worksheet's style pool
    pub style: StyleId,
}

impl CellData {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style: StyleId::DEFAULT,
        }
    }

    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style: StyleId) -> Self {
        Self { value, style }
    }

    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_absent() && self.style.is_default()
    }
}
