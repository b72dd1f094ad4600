//! Worksheet part (xl/worksheets/sheetN.xml)

use std::fmt::Write as _;

use tabex_core::{CellAddress, CellData, CellValue, Worksheet};

use super::escape_cell_text;
use crate::styles::XlsxStyleTable;

pub(super) fn worksheet_xml(
    sheet: &Worksheet,
    index: usize,
    style_table: &XlsxStyleTable,
) -> String {
    let dimension = sheet
        .used_range()
        .map(|r| r.to_a1_string())
        .unwrap_or_else(|| "A1".to_string());

    let mut content = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <dimension ref="{}"/>"#,
        dimension
    );

    let widths = sheet.custom_column_widths();
    if !widths.is_empty() {
        content.push_str("\n    <cols>");
        for (&col, width) in widths {
            let _ = write!(
                content,
                "\n        <col min=\"{0}\" max=\"{0}\" width=\"{1}\" customWidth=\"1\"/>",
                col + 1,
                width
            );
        }
        content.push_str("\n    </cols>");
    }

    content.push_str("\n    <sheetData>");

    // Cells arrive row-major; a row is opened by its first written cell
    let mut current_row: Option<u32> = None;
    for (addr, cell) in sheet.iter_cells() {
        let xf_id = style_table.xf_id_for(index, cell.style);
        let Some(cell_xml) = cell_xml(addr, cell, xf_id) else {
            continue;
        };

        if current_row != Some(addr.row) {
            if current_row.is_some() {
                content.push_str("\n        </row>");
            }
            let _ = write!(content, "\n        <row r=\"{}\">", addr.row + 1);
            current_row = Some(addr.row);
        }

        content.push_str("\n            ");
        content.push_str(&cell_xml);
    }

    if current_row.is_some() {
        content.push_str("\n        </row>");
    }

    content.push_str("\n    </sheetData>\n</worksheet>");
    content
}

/// Serialize one cell, or `None` when there is nothing to write
fn cell_xml(addr: CellAddress, cell: &CellData, xf_id: u32) -> Option<String> {
    let style_attr = if xf_id != 0 {
        format!(" s=\"{}\"", xf_id)
    } else {
        String::new()
    };

    let xml = match &cell.value {
        CellValue::Absent if xf_id == 0 => return None,
        CellValue::Absent => format!("<c r=\"{}\"{}/>", addr, style_attr),
        CellValue::Integer(n) => format!("<c r=\"{}\"{}><v>{}</v></c>", addr, style_attr, n),
        CellValue::Float(f) if f.is_finite() => {
            format!("<c r=\"{}\"{}><v>{}</v></c>", addr, style_attr, f)
        }
        CellValue::Boolean(b) => format!(
            "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
            addr,
            style_attr,
            u8::from(*b)
        ),
        // Strings, carried text, and non-finite floats
        other => inline_string(addr, &style_attr, &other.to_delimited_text()),
    };
    Some(xml)
}

fn inline_string(addr: CellAddress, style_attr: &str, text: &str) -> String {
    let space = if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        " xml:space=\"preserve\""
    } else {
        ""
    };
    format!(
        "<c r=\"{}\"{} t=\"inlineStr\"><is><t{}>{}</t></is></c>",
        addr,
        style_attr,
        space,
        escape_cell_text(text)
    )
}
