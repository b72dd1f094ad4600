//! # tabex-xlsx
//!
//! XLSX (Office Open XML) generator for tabex.
//!
//! [`build_workbook`] lays a [`SpreadsheetRequest`](tabex_core::SpreadsheetRequest)
//! out on a single worksheet; [`XlsxWriter`] serializes any workbook as a zip
//! package. [`XlsxWriter::generate`] does both.

pub mod builder;
pub mod error;
pub mod writer;

mod styles;

pub use builder::build_workbook;
pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;

/// MIME type of generated packages
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
