//! CSV writer

use std::io::Write;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvWriteOptions;
use tabex_core::{CellValue, DelimitedRequest, GenerationRequest};

/// Delimited-text generator
pub struct CsvWriter;

impl CsvWriter {
    /// Generate delimited text for a request.
    ///
    /// Defaults are applied to the request, it is validated, and the header
    /// record followed by one record per data row is written to `sink`. The
    /// sink is flushed but never closed.
    pub fn generate<W: Write + ?Sized>(
        request: &mut DelimitedRequest,
        sink: &mut W,
    ) -> CsvResult<()> {
        request.apply_defaults();
        request.validate()?;

        let options = CsvWriteOptions::for_request(request);
        Self::write(&request.base, sink, &options)
    }

    /// Write a table with explicit options
    pub fn write<W: Write + ?Sized>(
        table: &GenerationRequest,
        sink: &mut W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        tracing::debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            delimiter = %(options.delimiter as char),
            "generating delimited text"
        );

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.terminator())
            .from_writer(sink);

        if options.write_header {
            csv_writer
                .write_record(&table.headers)
                .map_err(CsvError::WriteHeader)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            table.check_row(index, row)?;

            let record: Vec<_> = row.iter().map(CellValue::to_delimited_text).collect();
            csv_writer
                .write_record(record.iter().map(|field| field.as_bytes()))
                .map_err(|source| CsvError::WriteRow {
                    row: index + 1,
                    source,
                })?;
        }

        csv_writer.flush()?;
        tracing::debug!(rows = table.row_count(), "delimited text written");
        Ok(())
    }
}
