//! XLSX writer

mod sheet;

use std::borrow::Cow;
use std::io::{Cursor, Seek, Write};

use crate::builder::build_workbook;
use crate::error::XlsxResult;
use crate::styles::XlsxStyleTable;
use tabex_core::{SpreadsheetRequest, Workbook};

/// XLSX package writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Generate a spreadsheet for a request.
    ///
    /// Defaults are applied to the request and it is validated before the
    /// workbook is built. The package is assembled in memory, then copied to
    /// `sink`, so nothing is written when generation fails.
    pub fn generate<W: Write + ?Sized>(
        request: &mut SpreadsheetRequest,
        sink: &mut W,
    ) -> XlsxResult<()> {
        request.apply_defaults();
        request.validate()?;

        let workbook = build_workbook(request)?;

        let mut buffer = Cursor::new(Vec::new());
        Self::write(&workbook, &mut buffer)?;

        let bytes = buffer.into_inner();
        sink.write_all(&bytes)?;
        sink.flush()?;

        tracing::debug!(bytes = bytes.len(), "spreadsheet written");
        Ok(())
    }

    /// Write a workbook to a seekable writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        let style_table = XlsxStyleTable::build(workbook);
        tracing::trace!(cell_formats = style_table.len(), "built style table");

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_part(&mut zip, "xl/styles.xml", &style_table.to_styles_xml())?;

        for (i, worksheet) in workbook.worksheets().enumerate() {
            let xml = sheet::worksheet_xml(worksheet, i, &style_table);
            Self::write_part(&mut zip, format!("xl/worksheets/sheet{}.xml", i + 1), &xml)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        name: impl Into<String>,
        content: &str,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(name.into(), options)?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");
        Self::write_part(zip, "[Content_Types].xml", &content)
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        Self::write_part(
            zip,
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
        )
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        Self::write_part(zip, "xl/workbook.xml", &content)
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#,
            workbook.sheet_count() + 1
        ));

        Self::write_part(zip, "xl/_rels/workbook.xml.rels", &content)
    }
}

/// Escape text for use in XML content or attribute values
///
/// Characters XML 1.0 cannot carry (control characters, U+FFFE, U+FFFF) are
/// written in the `_xHHHH_` form spreadsheet applications decode.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// Escape the text of a string cell
///
/// Like [`escape_xml`], and literal `_xHHHH_` sequences get their leading
/// underscore written as `_x005F_` so they are not decoded on read.
pub(crate) fn escape_cell_text(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

fn is_xml_illegal(c: char) -> bool {
    (c.is_control() && !matches!(c, '\t' | '\n' | '\r')) || matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

/// `rest` starts with an `_xHHHH_` sequence
fn starts_with_escape_sequence(rest: &str) -> bool {
    match rest.as_bytes() {
        [b'_', b'x', h1, h2, h3, h4, b'_', ..] => {
            [h1, h2, h3, h4].iter().all(|h| h.is_ascii_hexdigit())
        }
        _ => false,
    }
}

fn escape(s: &str, cell_text: bool) -> Cow<'_, str> {
    let needs_escape = |(i, c): (usize, char)| {
        matches!(c, '&' | '<' | '>' | '"' | '\'')
            || is_xml_illegal(c)
            || (cell_text && c == '_' && starts_with_escape_sequence(&s[i..]))
    };
    if !s.char_indices().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for (i, c) in s.char_indices() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '_' if cell_text && starts_with_escape_sequence(&s[i..]) => out.push_str("_x005F_"),
            c if is_xml_illegal(c) => out.push_str(&format!("_x{:04X}_", c as u32)),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
