//! Error types for tabex-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabex-core
#[derive(Debug, Error)]
pub enum Error {
    /// The request carries no header columns
    #[error("headers cannot be empty")]
    EmptyHeaders,

    /// The request carries no data rows
    #[error("data cannot be empty")]
    EmptyRows,

    /// A data row does not have one value per header
    #[error("row {row} has {actual} columns, expected {expected}")]
    RowLength {
        /// 1-based index of the offending data row
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of values in the row
        actual: usize,
    },

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(usize, u16),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// A style definition the workbook cannot represent
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
}
