//! CSV options

use tabex_core::DelimitedRequest;

/// Options for writing delimited text
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write the header record before the data
    pub write_header: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl CsvWriteOptions {
    /// Options for a request, honoring its delimiter when it is a single byte
    pub fn for_request(request: &DelimitedRequest) -> Self {
        Self {
            delimiter: request.resolved_delimiter(),
            ..Self::default()
        }
    }

    pub(crate) fn terminator(&self) -> csv::Terminator {
        match self.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        }
    }
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// Unix-style (LF)
    #[default]
    LF,
    /// Windows-style (CRLF)
    CRLF,
}
