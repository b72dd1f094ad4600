//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while generating delimited text
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header record could not be written
    #[error("failed to write header: {0}")]
    WriteHeader(#[source] csv::Error),

    /// A data record could not be written
    #[error("failed to write row {row}: {source}")]
    WriteRow {
        /// 1-based index of the data row
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] tabex_core::Error),
}
