//! Prelude module - common imports for tabex users
//!
//! ```rust
//! use tabex::prelude::*;
//! ```

pub use crate::{
    // Requests
    CellStyle,
    CellValue,
    DelimitedRequest,
    // Output
    Document,
    DocumentFormat,
    // Errors
    ExportError,
    GenerationRequest,
    SpreadsheetRequest,
    StyleSet,
    // Generators
    CsvWriter,
    XlsxWriter,
};
