//! # tabex-csv
//!
//! Delimited-text (CSV) generator for tabex.
//!
//! ```
//! use tabex_core::{CellValue, DelimitedRequest};
//! use tabex_csv::CsvWriter;
//!
//! let mut request = DelimitedRequest::new(
//!     vec!["Name".into(), "Age".into()],
//!     vec![vec![CellValue::from("Alice"), CellValue::from(30)]],
//! );
//!
//! let mut out = Vec::new();
//! CsvWriter::generate(&mut request, &mut out).unwrap();
//! assert_eq!(out, b"Name,Age\nAlice,30\n");
//! ```

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvWriteOptions, LineTerminator};
pub use writer::CsvWriter;
