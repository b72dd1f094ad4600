//! Workbook type - the document a spreadsheet generator fills in

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Characters a sheet name may not contain
pub const INVALID_SHEET_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook (spreadsheet document)
///
/// Created with a single worksheet named `Sheet1`.
#[derive(Debug)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new workbook with one worksheet named `Sheet1`
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new(crate::DEFAULT_SHEET_NAME)],
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }

        validate_sheet_name(new_name)?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }
}

/// Validate a sheet name
///
/// Length is counted in UTF-16 code units, as spreadsheet applications do.
fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("sheet name cannot be empty".into()));
    }
    if name.encode_utf16().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "'{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "'{}' cannot contain '{}'",
            name, c
        )));
    }
    Ok(())
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
