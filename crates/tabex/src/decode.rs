//! JSON request decoding
//!
//! Request bodies use snake_case field names; rows are carried as `data`:
//!
//! ```json
//! {
//!   "headers": ["Name", "Age"],
//!   "data": [["Alice", 30], ["Bob", null]],
//!   "filename": "people",
//!   "sheet_name": "People",
//!   "auto_size": true,
//!   "styles": {
//!     "header_style": {"bold": true, "background": "#4472C4", "font_color": "#FFFFFF"},
//!     "data_style": {"alignment": "center"}
//!   }
//! }
//! ```

use std::io::Read;

use tabex_core::{DelimitedRequest, SpreadsheetRequest};

use crate::error::ExportResult;

/// Decode a delimited-text request from a JSON string
pub fn csv_request_from_json(json: &str) -> ExportResult<DelimitedRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a spreadsheet request from a JSON string
pub fn xlsx_request_from_json(json: &str) -> ExportResult<SpreadsheetRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a delimited-text request from a JSON reader
pub fn csv_request_from_reader<R: Read>(reader: R) -> ExportResult<DelimitedRequest> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode a spreadsheet request from a JSON reader
pub fn xlsx_request_from_reader<R: Read>(reader: R) -> ExportResult<SpreadsheetRequest> {
    Ok(serde_json::from_reader(reader)?)
}
