//! Error type for document rendering

use thiserror::Error;

/// Result type alias using [`ExportError`]
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while decoding or rendering a document
#[derive(Debug, Error)]
pub enum ExportError {
    /// The request body is not a valid request
    #[error("invalid request: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request failed validation
    #[error(transparent)]
    Core(#[from] tabex_core::Error),

    /// Delimited-text generation failed
    #[error(transparent)]
    Csv(#[from] tabex_csv::CsvError),

    /// Spreadsheet generation failed
    #[error(transparent)]
    Xlsx(#[from] tabex_xlsx::XlsxError),
}

impl ExportError {
    /// Whether the failure lies in the request rather than in generation
    pub fn is_invalid_request(&self) -> bool {
        use tabex_core::Error as Core;

        let core = match self {
            ExportError::Decode(_) => return true,
            ExportError::Core(e) => e,
            ExportError::Csv(tabex_csv::CsvError::Core(e)) => e,
            ExportError::Xlsx(tabex_xlsx::XlsxError::Core(e)) => e,
            _ => return false,
        };
        matches!(
            core,
            Core::EmptyHeaders
                | Core::EmptyRows
                | Core::RowLength { .. }
                | Core::InvalidSheetName(_)
                | Core::InvalidStyle(_)
                | Core::ColumnOutOfBounds(..)
                | Core::RowOutOfBounds(..)
        )
    }
}
