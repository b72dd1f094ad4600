//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a 0-based column index to spreadsheet column letters.
///
/// Bijective base-26: `0 = A`, `25 = Z`, `26 = AA`, `701 = ZZ`, `702 = AAA`.
/// The index is not bounded by the worksheet column limit.
///
/// ```
/// use tabex_core::column_letters;
///
/// assert_eq!(column_letters(0), "A");
/// assert_eq!(column_letters(51), "AZ");
/// assert_eq!(column_letters(702), "AAA");
/// ```
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::with_capacity(4);
    let mut n = index;

    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Convert column letters back to a 0-based index (case-insensitive).
///
/// Returns `None` for empty input, non-letters, or overflow.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }

    Some(col - 1)
}

/// A cell address (e.g., "A1", "XFD1048576")
///
/// Rows and columns are 0-based internally; rows display 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Create a checked address from unbounded indices
    pub fn checked(row: usize, col: usize) -> Result<Self> {
        if col >= MAX_COLS as usize {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        let row = u32::try_from(row)
            .ok()
            .filter(|r| *r < MAX_ROWS)
            .ok_or(Error::RowOutOfBounds(
                u32::try_from(row).unwrap_or(u32::MAX),
                MAX_ROWS - 1,
            ))?;
        Ok(Self::new(row, col as u16))
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabex_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (col_str, row_str) = s.split_at(split);

        if col_str.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = Self::letters_to_column(col_str)?;

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in A1 notation
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        column_letters(col as usize)
    }

    /// Convert column letters to a worksheet column index
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        let col = column_index(letters)
            .ok_or_else(|| Error::InvalidAddress(format!("invalid column letters '{}'", letters)))?;

        if col >= MAX_COLS as usize {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(col as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so start is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => {
                let start = CellAddress::parse(start)
                    .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
                let end = CellAddress::parse(end)
                    .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
                Ok(Self::new(start, end))
            }
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let (start, end) = (self.start, self.end);
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| CellAddress::new(row, col)))
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start, self.end)
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(column_letters(16383), "XFD"); // Max Excel column
        assert_eq!(column_letters(18277), "ZZZ");
        assert_eq!(column_letters(18278), "AAAA");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("Z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("ZZ"), Some(701));
        assert_eq!(column_index("AAA"), Some(702));
        assert_eq!(column_index("xfd"), Some(16383));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn test_letters_to_column_bounds() {
        assert_eq!(CellAddress::letters_to_column("XFD").unwrap(), 16383);
        assert!(CellAddress::letters_to_column("XFE").is_err());
        assert!(CellAddress::letters_to_column("").is_err());
    }

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(0, 0));

        let addr = CellAddress::parse("b2").unwrap();
        assert_eq!(addr, CellAddress::new(1, 1));

        let addr = CellAddress::parse("XFD1048576").unwrap();
        assert_eq!(addr.row, 1048575);
        assert_eq!(addr.col, 16383);
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("A1048577").is_err()); // Row too large
        assert!(CellAddress::parse("XFE1").is_err()); // Column too large
    }

    #[test]
    fn test_checked_address() {
        assert_eq!(CellAddress::checked(1, 2).unwrap(), CellAddress::new(1, 2));
        assert!(matches!(
            CellAddress::checked(0, 16384),
            Err(Error::ColumnOutOfBounds(16384, 16383))
        ));
        assert!(matches!(
            CellAddress::checked(1_048_576, 0),
            Err(Error::RowOutOfBounds(..))
        ));
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(1, 1));

        // Single cell
        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, CellAddress::new(2, 2));
        assert_eq!(range.end, CellAddress::new(2, 2));
        assert_eq!(range.to_string(), "C3");
    }

    #[test]
    fn test_cell_range_normalizes() {
        let range = CellRange::from_indices(3, 3, 1, 1);
        assert_eq!(range.to_string(), "B2:D4");
        assert_eq!(range.row_count(), 3);
        assert_eq!(range.col_count(), 3);
        assert!(range.contains(&CellAddress::new(2, 2)));
        assert!(!range.contains(&CellAddress::new(0, 0)));
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], CellAddress::new(0, 0)); // A1
        assert_eq!(cells[1], CellAddress::new(0, 1)); // B1
        assert_eq!(cells[2], CellAddress::new(1, 0)); // A2
        assert_eq!(cells[3], CellAddress::new(1, 1)); // B2
    }

    proptest! {
        #[test]
        fn prop_column_letters_is_bijective(n in 0usize..1_000_000) {
            let letters = column_letters(n);
            prop_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert_eq!(column_index(&letters), Some(n));
        }

        #[test]
        fn prop_adjacent_columns_differ(n in 0usize..100_000) {
            prop_assert_ne!(column_letters(n), column_letters(n + 1));
        }
    }
}
