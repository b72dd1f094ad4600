//! # tabex-core
//!
//! Core data structures for the tabex tabular export engine.
//!
//! This crate provides the types shared by the delimited-text and spreadsheet
//! generators:
//! - [`CellValue`] - Untyped cell values (strings, numbers, booleans, absent)
//! - [`CellAddress`] and [`CellRange`] - Column-letter cell addressing
//! - [`Style`] and [`StylePool`] - Cell formatting compiled into [`StyleId`] handles
//! - [`Workbook`], [`Worksheet`] - The in-memory spreadsheet model
//! - [`GenerationRequest`] and friends - The request model both generators consume
//!
//! ## Example
//!
//! ```rust
//! use tabex_core::{CellValue, GenerationRequest};
//!
//! let request = GenerationRequest::new(
//!     vec!["Name".into(), "Age".into()],
//!     vec![vec![CellValue::from("Alice"), CellValue::from(30)]],
//! );
//! request.validate().unwrap();
//! assert_eq!(request.rows[0][1].to_delimited_text(), "30");
//! ```

pub mod cell;
pub mod error;
pub mod request;
pub mod sanitize;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{column_index, column_letters, CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use request::{
    CellStyle, DelimitedRequest, GenerationRequest, SpreadsheetRequest, StyleSet,
    AUTO_SIZE_COLUMN_WIDTH, DEFAULT_CSV_FILENAME, DEFAULT_DELIMITER, DEFAULT_ENCODING,
    DEFAULT_SHEET_NAME, DEFAULT_XLSX_FILENAME,
};
pub use sanitize::{sanitize_filename, sanitize_sheet_name};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, Color, FillStyle, FontStyle, HorizontalAlignment, Style, StyleId, StylePool,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Largest font size a spreadsheet style may carry, in points
pub const MAX_FONT_SIZE: f64 = 409.0;
