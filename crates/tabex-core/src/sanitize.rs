//! Filename and sheet-name sanitizers

use crate::workbook::INVALID_SHEET_NAME_CHARS;
use crate::MAX_SHEET_NAME_LEN;

/// Make a requested filename safe to hand to a client.
///
/// Path separators and `..` are replaced with `_`, and `.{ext}` is appended
/// unless the name already ends with it (ignoring case).
///
/// ```
/// use tabex_core::sanitize_filename;
///
/// assert_eq!(sanitize_filename("../etc/passwd", "csv"), "__etc_passwd.csv");
/// assert_eq!(sanitize_filename("Report.XLSX", "xlsx"), "Report.XLSX");
/// ```
pub fn sanitize_filename(name: &str, ext: &str) -> String {
    let mut clean = name.replace(['/', '\\'], "_").replace("..", "_");

    let suffix = format!(".{}", ext.to_lowercase());
    if !clean.to_lowercase().ends_with(&suffix) {
        clean.push_str(&suffix);
    }
    clean
}

/// Make a requested sheet name acceptable to a workbook.
///
/// Forbidden characters become `_` and the result is cut to 31 UTF-16 code
/// units without splitting a character. An empty name stays empty; callers
/// default it beforehand.
pub fn sanitize_sheet_name(name: &str) -> String {
    let mut units = 0;
    name.chars()
        .map(|c| {
            if INVALID_SHEET_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .take_while(|c| {
            units += c.len_utf16();
            units <= MAX_SHEET_NAME_LEN
        })
        .collect()
}
