//! Lays a spreadsheet request out on a workbook

use tabex_core::{
    CellAddress, CellRange, CellStyle, SpreadsheetRequest, Workbook, Worksheet,
    AUTO_SIZE_COLUMN_WIDTH, DEFAULT_SHEET_NAME,
};

use crate::error::{XlsxError, XlsxResult};

/// Build a single-sheet workbook from a request.
///
/// Headers go to row 1 and data row `r` (0-based) to row `r + 2`. A header
/// style covers `A1:<last>1` and a data style the whole data rectangle; each
/// is compiled once and shared by every cell it covers.
///
/// The request should already be defaulted and validated.
pub fn build_workbook(request: &SpreadsheetRequest) -> XlsxResult<Workbook> {
    let table = &request.base;
    if table.headers.is_empty() {
        return Err(tabex_core::Error::EmptyHeaders.into());
    }

    // Bottom-right cell: header row plus one row per data row
    let last = CellAddress::checked(table.row_count(), table.column_count() - 1)?;

    let mut workbook = Workbook::new();
    let sheet_name = request.sheet_name();
    if sheet_name != DEFAULT_SHEET_NAME {
        workbook.rename_worksheet(0, sheet_name)?;
    }

    tracing::debug!(
        sheet = sheet_name,
        rows = table.row_count(),
        columns = table.column_count(),
        "building workbook"
    );

    let sheet = workbook
        .worksheet_mut(0)
        .ok_or_else(|| XlsxError::InvalidFormat("workbook has no worksheet".into()))?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet.set_cell_value_at(0, col as u16, header.as_str())?;
    }

    if let Some(style) = request.header_style() {
        apply_style(sheet, style, CellRange::from_indices(0, 0, 0, last.col))?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        table.check_row(index, row)?;

        let sheet_row = index as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            sheet.set_cell_value_at(sheet_row, col as u16, value.clone())?;
        }
    }

    if let Some(style) = request.data_style() {
        if last.row > 0 {
            apply_style(sheet, style, CellRange::from_indices(1, 0, last.row, last.col))?;
        }
    }

    if request.auto_size {
        for col in 0..=last.col {
            sheet.set_column_width(col, AUTO_SIZE_COLUMN_WIDTH);
        }
    }

    Ok(workbook)
}

fn apply_style(sheet: &mut Worksheet, style: &CellStyle, range: CellRange) -> XlsxResult<()> {
    let id = sheet.register_style(style.compile()?);
    sheet.set_range_style(&range, id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabex_core::{CellValue, Error, StyleSet};

    fn people() -> SpreadsheetRequest {
        SpreadsheetRequest::new(
            vec!["Name".into(), "Age".into()],
            vec![
                vec!["Alice".into(), 30.into()],
                vec!["Bob".into(), 25.into()],
            ],
        )
    }

    #[test]
    fn test_layout() {
        let wb = build_workbook(&people()).unwrap();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.name(), "Sheet1");
        assert_eq!(sheet.get_value("A1").unwrap(), CellValue::string("Name"));
        assert_eq!(sheet.get_value("B1").unwrap(), CellValue::string("Age"));
        assert_eq!(sheet.get_value("A3").unwrap(), CellValue::string("Bob"));
        assert_eq!(sheet.get_value("B2").unwrap(), CellValue::Integer(30));
        assert_eq!(sheet.used_range().unwrap().to_string(), "A1:B3");
        assert!(sheet.custom_column_widths().is_empty());
    }

    #[test]
    fn test_sheet_name_and_auto_size() {
        let request = people().with_sheet_name("People").with_auto_size(true);
        let wb = build_workbook(&request).unwrap();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.name(), "People");
        assert_eq!(sheet.column_width(0), AUTO_SIZE_COLUMN_WIDTH);
        assert_eq!(sheet.column_width(1), AUTO_SIZE_COLUMN_WIDTH);
        assert_eq!(sheet.custom_column_widths().len(), 2);
    }

    #[test]
    fn test_styles_compiled_once() {
        let request = people().with_styles(StyleSet {
            header_style: Some(CellStyle {
                bold: true,
                ..Default::default()
            }),
            data_style: Some(CellStyle {
                alignment: Some("right".into()),
                ..Default::default()
            }),
        });
        let wb = build_workbook(&request).unwrap();
        let sheet = wb.worksheet(0).unwrap();

        // default + header + data
        assert_eq!(sheet.styles().len(), 3);

        let header = sheet.cell_at(0, 0).unwrap().style;
        assert_eq!(sheet.cell_at(0, 1).unwrap().style, header);
        assert!(sheet.style_by_id(header).unwrap().font.bold);

        let data = sheet.cell_at(1, 0).unwrap().style;
        for (row, col) in [(1, 1), (2, 0), (2, 1)] {
            assert_eq!(sheet.cell_at(row, col).unwrap().style, data);
        }
        assert_ne!(header, data);
    }

    #[test]
    fn test_absent_values_keep_data_style() {
        let mut request = people().with_styles(StyleSet {
            header_style: None,
            data_style: Some(CellStyle {
                background: Some("#FFFF00".into()),
                ..Default::default()
            }),
        });
        request.base.rows[1][1] = CellValue::Absent;

        let wb = build_workbook(&request).unwrap();
        let cell = wb.worksheet(0).unwrap().cell_at(2, 1).unwrap();
        assert!(cell.value.is_absent());
        assert!(!cell.style.is_default());
    }

    #[test]
    fn test_row_length_mismatch() {
        let mut request = people();
        request.base.rows.push(vec!["Carol".into(), 41.into(), "extra".into()]);

        let err = build_workbook(&request).unwrap_err();
        assert!(matches!(
            err,
            XlsxError::Core(Error::RowLength {
                row: 3,
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_invalid_sheet_name() {
        let request = people().with_sheet_name("a/b");
        assert!(matches!(
            build_workbook(&request),
            Err(XlsxError::Core(Error::InvalidSheetName(_)))
        ));
    }

    #[test]
    fn test_invalid_style() {
        let request = people().with_styles(StyleSet {
            header_style: Some(CellStyle {
                font_color: Some("not-a-color".into()),
                ..Default::default()
            }),
            data_style: None,
        });
        assert!(matches!(
            build_workbook(&request),
            Err(XlsxError::Core(Error::InvalidStyle(_)))
        ));
    }

    #[test]
    fn test_too_many_columns() {
        let headers: Vec<String> = (0..16_385).map(|i| format!("c{}", i)).collect();
        let request = SpreadsheetRequest::new(headers, vec![vec![]]);
        assert!(matches!(
            build_workbook(&request),
            Err(XlsxError::Core(Error::ColumnOutOfBounds(16_384, _)))
        ));
    }
}
