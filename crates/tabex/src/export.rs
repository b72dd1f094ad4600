//! In-memory document rendering

use std::fmt;
use std::str::FromStr;

use tabex_core::{
    sanitize_filename, sanitize_sheet_name, DelimitedRequest, SpreadsheetRequest,
    DEFAULT_CSV_FILENAME, DEFAULT_XLSX_FILENAME,
};
use tabex_csv::CsvWriter;
use tabex_xlsx::XlsxWriter;

use crate::error::ExportResult;

/// Output format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Delimited text
    Csv,
    /// Office Open XML spreadsheet
    Xlsx,
}

impl DocumentFormat {
    /// MIME type served with the document
    pub fn content_type(self) -> &'static str {
        match self {
            DocumentFormat::Csv => "text/csv",
            DocumentFormat::Xlsx => tabex_xlsx::XLSX_CONTENT_TYPE,
        }
    }

    /// Filename extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Csv => "csv",
            DocumentFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(DocumentFormat::Csv),
            "xlsx" | "excel" => Ok(DocumentFormat::Xlsx),
            other => Err(format!("unsupported format '{}'", other)),
        }
    }
}

/// A rendered document ready to hand to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Sanitized filename, always ending in the format's extension
    pub filename: String,
    /// Output format
    pub format: DocumentFormat,
    /// MIME type
    pub content_type: &'static str,
    /// Document contents
    pub bytes: Vec<u8>,
}

impl Document {
    fn new(filename: String, format: DocumentFormat, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            format,
            content_type: format.content_type(),
            bytes,
        }
    }

    /// Size of the document in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document has no contents
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Render a delimited-text document
pub fn render_csv(mut request: DelimitedRequest) -> ExportResult<Document> {
    request.apply_defaults();
    request.validate()?;

    let filename = sanitize_filename(
        request.base.filename.as_deref().unwrap_or(DEFAULT_CSV_FILENAME),
        DocumentFormat::Csv.extension(),
    );

    let mut bytes = Vec::new();
    CsvWriter::generate(&mut request, &mut bytes)?;

    tracing::debug!(%filename, bytes = bytes.len(), "rendered csv document");
    Ok(Document::new(filename, DocumentFormat::Csv, bytes))
}

/// Render a spreadsheet document
///
/// The sheet name is sanitized before the workbook is built, so a name with
/// forbidden characters is repaired rather than rejected.
pub fn render_xlsx(mut request: SpreadsheetRequest) -> ExportResult<Document> {
    request.apply_defaults();
    request.validate()?;

    let filename = sanitize_filename(
        request.base.filename.as_deref().unwrap_or(DEFAULT_XLSX_FILENAME),
        DocumentFormat::Xlsx.extension(),
    );
    request.sheet_name = Some(sanitize_sheet_name(request.sheet_name()));

    let mut bytes = Vec::new();
    XlsxWriter::generate(&mut request, &mut bytes)?;

    tracing::debug!(%filename, bytes = bytes.len(), "rendered xlsx document");
    Ok(Document::new(filename, DocumentFormat::Xlsx, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabex_core::CellValue;

    fn rows() -> Vec<Vec<CellValue>> {
        vec![vec!["Alice".into(), 30.into()], vec!["Bob".into(), 25.into()]]
    }

    #[test]
    fn test_render_csv() {
        let request = DelimitedRequest::new(vec!["Name".into(), "Age".into()], rows());
        let doc = render_csv(request).unwrap();

        assert_eq!(doc.filename, "export.csv");
        assert_eq!(doc.content_type, "text/csv");
        assert_eq!(doc.bytes, b"Name,Age\nAlice,30\nBob,25\n");
        assert_eq!(doc.len(), 25);
    }

    #[test]
    fn test_render_csv_sanitizes_filename() {
        let mut request = DelimitedRequest::new(vec!["Name".into(), "Age".into()], rows());
        request.base.filename = Some("../../reports/q1".into());

        let doc = render_csv(request).unwrap();
        assert_eq!(doc.filename, "____reports_q1.csv");
    }

    #[test]
    fn test_render_xlsx() {
        let mut request = SpreadsheetRequest::new(vec!["Name".into(), "Age".into()], rows())
            .with_sheet_name("Q1/Q2 [draft]");
        request.base.filename = Some("Report.XLSX".into());

        let doc = render_xlsx(request).unwrap();
        assert_eq!(doc.filename, "Report.XLSX");
        assert_eq!(doc.format, DocumentFormat::Xlsx);
        assert_eq!(
            doc.content_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(&doc.bytes[..2], b"PK");
    }

    #[test]
    fn test_validation_errors() {
        let request = DelimitedRequest::new(vec![], rows());
        let err = render_csv(request).unwrap_err();
        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), "headers cannot be empty");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<DocumentFormat>(), Ok(DocumentFormat::Csv));
        assert_eq!("xlsx".parse::<DocumentFormat>(), Ok(DocumentFormat::Xlsx));
        assert!("pdf".parse::<DocumentFormat>().is_err());
        assert_eq!(DocumentFormat::Xlsx.to_string(), "xlsx");
    }
}
