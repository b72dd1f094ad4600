//! # tabex
//!
//! Generate CSV and XLSX documents from tabular requests.
//!
//! A request carries a header row, data rows of untyped values, and
//! format-specific options. Each call defaults, validates and renders one
//! request into an in-memory [`Document`].
//!
//! ## Example
//!
//! ```rust
//! use tabex::prelude::*;
//!
//! let request = tabex::decode::xlsx_request_from_json(
//!     r#"{
//!         "headers": ["Name", "Age"],
//!         "data": [["Alice", 30], ["Bob", 25]],
//!         "sheet_name": "People",
//!         "styles": {"header_style": {"bold": true}}
//!     }"#,
//! )
//! .unwrap();
//!
//! let document = tabex::render_xlsx(request).unwrap();
//! assert_eq!(document.filename, "export.xlsx");
//! assert_eq!(document.format, DocumentFormat::Xlsx);
//! ```

pub mod decode;
pub mod error;
pub mod export;
pub mod prelude;

pub use error::{ExportError, ExportResult};
pub use export::{render_csv, render_xlsx, Document, DocumentFormat};

// Re-export core types
pub use tabex_core::{
    column_index, column_letters, sanitize_filename, sanitize_sheet_name, CellAddress, CellRange,
    CellStyle, CellValue, Color, DelimitedRequest, Error, GenerationRequest, HorizontalAlignment,
    Result, SpreadsheetRequest, Style, StyleId, StyleSet, Workbook, Worksheet,
    AUTO_SIZE_COLUMN_WIDTH, DEFAULT_CSV_FILENAME, DEFAULT_DELIMITER, DEFAULT_ENCODING,
    DEFAULT_SHEET_NAME, DEFAULT_XLSX_FILENAME, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export generators
pub use tabex_csv::{CsvError, CsvWriteOptions, CsvWriter, LineTerminator};
pub use tabex_xlsx::{build_workbook, XlsxError, XlsxWriter};
