//! End-to-end tests for delimited-text generation

use std::io::{self, Write};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tabex_core::{CellValue, DelimitedRequest};
use tabex_csv::{CsvError, CsvWriter};

/// Sink that accepts a fixed number of bytes, then fails
struct FailingSink {
    remaining: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn people() -> DelimitedRequest {
    DelimitedRequest::new(
        vec!["Name".into(), "Age".into()],
        vec![
            vec!["Alice".into(), 30.into()],
            vec!["Bob".into(), 25.into()],
        ],
    )
}

#[test]
fn test_people_export() {
    let mut out = Vec::new();
    CsvWriter::generate(&mut people(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Name,Age\nAlice,30\nBob,25\n");
}

#[test]
fn test_writes_to_file() {
    let mut file = tempfile::tempfile().unwrap();
    CsvWriter::generate(&mut people(), &mut file).unwrap();

    // The sink is still usable after generation
    writeln!(file, "# end").unwrap();

    use std::io::{Read, Seek, SeekFrom};
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    assert_eq!(text, "Name,Age\nAlice,30\nBob,25\n# end\n");
}

#[test]
fn test_record_count_matches_rows() {
    let rows: Vec<Vec<CellValue>> = (0..50)
        .map(|i| vec![format!("user{}", i).into(), i.into()])
        .collect();
    let mut request = DelimitedRequest::new(vec!["Name".into(), "Id".into()], rows);

    let mut out = Vec::new();
    CsvWriter::generate(&mut request, &mut out).unwrap();

    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(out.as_slice());
    assert_eq!(reader.into_records().count(), 51);
}

#[test]
fn test_header_write_failure() {
    // A header wider than the writer's internal buffer has to reach the sink
    let mut request = DelimitedRequest::new(
        vec!["h".repeat(64 * 1024)],
        vec![vec!["x".into()]],
    );
    let mut sink = FailingSink { remaining: 0 };

    let err = CsvWriter::generate(&mut request, &mut sink).unwrap_err();
    assert!(matches!(err, CsvError::WriteHeader(_)), "got {err:?}");
}

#[test]
fn test_row_write_failure_reports_row() {
    let mut request = DelimitedRequest::new(
        vec!["Name".into()],
        vec![vec!["ok".into()], vec!["r".repeat(64 * 1024).into()]],
    );
    let mut sink = FailingSink { remaining: 0 };

    let err = CsvWriter::generate(&mut request, &mut sink).unwrap_err();
    assert!(matches!(err, CsvError::WriteRow { row: 2, .. }), "got {err:?}");
}

#[test]
fn test_flush_failure_is_io_error() {
    let mut sink = FailingSink { remaining: 4 };
    let err = CsvWriter::generate(&mut people(), &mut sink).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)), "got {err:?}");
}

#[test]
fn test_quote_or_newline_delimiter_falls_back_to_comma() {
    for delimiter in ["\"", "\n", "\r"] {
        let mut request = DelimitedRequest::new(
            vec!["a".into(), "b".into()],
            vec![vec!["p\"q".into(), "y".into()]],
        )
        .with_delimiter(delimiter);

        let mut out = Vec::new();
        CsvWriter::generate(&mut request, &mut out).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "a,b\n\"p\"\"q\",y\n");

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.iter().collect::<Vec<_>>(), vec!["p\"q", "y"]);
    }
}

proptest! {
    #[test]
    fn prop_fields_round_trip(
        fields in prop::collection::vec("[a-z,;\"\n\r ]{0,12}", 1..6),
        delimiter in prop::sample::select(vec![",", ";", "\t", "|"]),
    ) {
        let headers: Vec<String> = (0..fields.len()).map(|i| format!("c{}", i)).collect();
        let row: Vec<CellValue> = fields.iter().map(|f| CellValue::from(f.as_str())).collect();
        let mut request = DelimitedRequest::new(headers.clone(), vec![row]).with_delimiter(delimiter);

        let mut out = Vec::new();
        CsvWriter::generate(&mut request, &mut out).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_bytes()[0])
            .from_reader(out.as_slice());
        let parsed_headers: Vec<String> =
            reader.headers().unwrap().iter().map(String::from).collect();
        prop_assert_eq!(parsed_headers, headers);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(records.len(), 1);
        let parsed: Vec<String> = records[0].iter().map(String::from).collect();
        prop_assert_eq!(parsed, fields);
    }
}
