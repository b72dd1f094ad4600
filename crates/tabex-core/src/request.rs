//! Generation requests
//!
//! A request is built (or decoded) per call, defaulted with
//! `apply_defaults`, validated, and consumed by exactly one generator.

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::style::{Color, HorizontalAlignment, Style};
use crate::MAX_FONT_SIZE;

/// Field delimiter used when none is given
pub const DEFAULT_DELIMITER: &str = ",";

/// Declared text encoding used when none is given
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Filename used for delimited output when none is given
pub const DEFAULT_CSV_FILENAME: &str = "export.csv";

/// Filename used for spreadsheet output when none is given
pub const DEFAULT_XLSX_FILENAME: &str = "export.xlsx";

/// Name of the single worksheet when none is given
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Width given to every header column when auto-sizing is requested
pub const AUTO_SIZE_COLUMN_WIDTH: f64 = 15.0;

/// Fields shared by every generation request
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GenerationRequest {
    /// Column titles, in output order
    pub headers: Vec<String>,
    /// Data rows; each must have exactly one value per header
    #[cfg_attr(feature = "serde", serde(rename = "data"))]
    pub rows: Vec<Vec<CellValue>>,
    /// Requested output filename
    #[cfg_attr(feature = "serde", serde(default))]
    pub filename: Option<String>,
}

impl GenerationRequest {
    /// Create a request from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            headers,
            rows,
            filename: None,
        }
    }

    /// Set the requested filename
    pub fn with_filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Number of header columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check the request has at least one header and one data row
    pub fn validate(&self) -> Result<()> {
        if self.headers.is_empty() {
            return Err(Error::EmptyHeaders);
        }
        if self.rows.is_empty() {
            return Err(Error::EmptyRows);
        }
        Ok(())
    }

    /// Check that data row `index` (0-based) has one value per header
    pub fn check_row(&self, index: usize, row: &[CellValue]) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(Error::RowLength {
                row: index + 1,
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        Ok(())
    }

    fn default_filename(&mut self, default: &str) {
        fill_unset(&mut self.filename, default);
    }
}

/// Request for delimited-text (CSV) output
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DelimitedRequest {
    /// Shared request fields
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: GenerationRequest,
    /// Field delimiter; only single-byte values are honored
    #[cfg_attr(feature = "serde", serde(default))]
    pub delimiter: Option<String>,
    /// Declared encoding; informational only, output is always UTF-8
    #[cfg_attr(feature = "serde", serde(default))]
    pub encoding: Option<String>,
}

impl DelimitedRequest {
    /// Create a request from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            base: GenerationRequest::new(headers, rows),
            ..Default::default()
        }
    }

    /// Set the delimiter
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Fill unset optional fields with their defaults
    pub fn apply_defaults(&mut self) {
        self.base.default_filename(DEFAULT_CSV_FILENAME);
        fill_unset(&mut self.delimiter, DEFAULT_DELIMITER);
        fill_unset(&mut self.encoding, DEFAULT_ENCODING);
    }

    /// Validate the shared request fields
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    /// The delimiter byte to write with
    ///
    /// A delimiter that is not exactly one byte long, or that is the quote
    /// character or a line break, falls back to `,`.
    pub fn resolved_delimiter(&self) -> u8 {
        let requested = self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER);
        match requested.as_bytes() {
            [byte] if !matches!(byte, b'"' | b'\r' | b'\n') => *byte,
            _ => {
                tracing::warn!(
                    delimiter = requested,
                    "delimiter unusable, falling back to ','"
                );
                b','
            }
        }
    }
}

/// Request for spreadsheet (XLSX) output
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SpreadsheetRequest {
    /// Shared request fields
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: GenerationRequest,
    /// Name of the single worksheet
    #[cfg_attr(feature = "serde", serde(default))]
    pub sheet_name: Option<String>,
    /// Give every header column a fixed readable width
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_size: bool,
    /// Header and data styles
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: Option<StyleSet>,
}

impl SpreadsheetRequest {
    /// Create a request from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            base: GenerationRequest::new(headers, rows),
            ..Default::default()
        }
    }

    /// Set the sheet name
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Set the styles
    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Enable or disable auto-sizing
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Fill unset optional fields with their defaults
    pub fn apply_defaults(&mut self) {
        self.base.default_filename(DEFAULT_XLSX_FILENAME);
        fill_unset(&mut self.sheet_name, DEFAULT_SHEET_NAME);
    }

    /// Validate the shared request fields
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    /// The sheet name, or the default when unset
    pub fn sheet_name(&self) -> &str {
        match self.sheet_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_SHEET_NAME,
        }
    }

    /// The header style, if any
    pub fn header_style(&self) -> Option<&CellStyle> {
        self.styles.as_ref().and_then(|s| s.header_style.as_ref())
    }

    /// The data style, if any
    pub fn data_style(&self) -> Option<&CellStyle> {
        self.styles.as_ref().and_then(|s| s.data_style.as_ref())
    }
}

/// Styles applied uniformly to the header row and the data rows
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSet {
    /// Style of the header row
    pub header_style: Option<CellStyle>,
    /// Style of every data cell
    pub data_style: Option<CellStyle>,
}

/// Request-level description of a cell style
///
/// Colors are hex strings (`#4472C4`, `FF4472C4`); alignment is `left`,
/// `center` or `right` in any case, and other values are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellStyle {
    /// Bold font
    pub bold: bool,
    /// Font size in points; zero or negative means unset
    pub font_size: Option<f64>,
    /// Font color as hex
    pub font_color: Option<String>,
    /// Solid background color as hex
    pub background: Option<String>,
    /// Horizontal alignment
    pub alignment: Option<String>,
}

impl CellStyle {
    /// Compile into a spreadsheet [`Style`]
    ///
    /// Fails on a color that is not 6 or 8 hex digits, or a font size above
    /// the 409 point maximum.
    pub fn compile(&self) -> Result<Style> {
        let mut style = Style::new().bold(self.bold);

        if let Some(size) = self.font_size.filter(|s| *s > 0.0) {
            if !size.is_finite() || size > MAX_FONT_SIZE {
                return Err(Error::InvalidStyle(format!(
                    "font size {} exceeds {}",
                    size, MAX_FONT_SIZE
                )));
            }
            style = style.font_size(size);
        }

        if let Some(color) = parse_color("font_color", self.font_color.as_deref())? {
            style = style.font_color(color);
        }
        if let Some(color) = parse_color("background", self.background.as_deref())? {
            style = style.fill_color(color);
        }

        if let Some(alignment) = self.alignment.as_deref() {
            match HorizontalAlignment::parse(alignment) {
                Some(horizontal) => style = style.horizontal_alignment(horizontal),
                None => tracing::trace!(alignment, "ignoring unrecognized alignment"),
            }
        }

        tracing::trace!(?style, "compiled cell style");
        Ok(style)
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(hex) => Color::from_hex(hex)
            .map(Some)
            .ok_or_else(|| Error::InvalidStyle(format!("{} '{}' is not a hex color", field, hex))),
    }
}

fn fill_unset(field: &mut Option<String>, default: &str) {
    if field.as_deref().map_or(true, str::is_empty) {
        *field = Some(default.to_string());
    }
}
