//! Cell address type

use crate::error::{Error, Result};
use crate::COLUMN_COUNT;
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "Z20")
///
/// A single uppercase column letter (A-Z) followed by a row number with no
/// leading zero. Both components are 1-based, matching how they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, ..., Z=26)
    pub col: u8,
}

impl CellAddress {
    /// Create a new cell address. No bounds are checked.
    pub fn new(row: u32, col: u8) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Surrounding whitespace is ignored. Lowercase letters, multi-letter
    /// columns and leading zeros in the row are rejected as
    /// [`Error::InvalidAddress`].
    ///
    /// # Examples
    /// ```
    /// use mini_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.row, 12);
    /// assert_eq!(addr.col, 2);
    ///
    /// assert!(CellAddress::parse("b12").is_err());
    /// assert!(CellAddress::parse("B012").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (_, letter, digits) = regex_captures!(r"^([A-Z])([1-9][0-9]*)$", s.trim())
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;

        let col = letter.as_bytes()[0] - b'A' + 1;
        if !(1..=COLUMN_COUNT).contains(&col) {
            return Err(Error::ColumnOutOfBounds(col, COLUMN_COUNT));
        }

        // The pattern guarantees digits only, so a failed parse means overflow
        let row: u64 = digits.parse().unwrap_or(u64::MAX);
        let row = u32::try_from(row).map_err(|_| Error::RowOutOfBounds(row, u32::MAX))?;

        Ok(Self { row, col })
    }

    /// Parse a cell address and check it against a grid with `rows` rows
    pub fn parse_within(s: &str, rows: u32) -> Result<Self> {
        let addr = Self::parse(s)?;
        addr.check_bounds(rows)?;
        Ok(addr)
    }

    /// Check that this address lies inside a grid with `rows` rows
    pub fn check_bounds(&self, rows: u32) -> Result<()> {
        if !(1..=COLUMN_COUNT).contains(&self.col) {
            return Err(Error::ColumnOutOfBounds(self.col, COLUMN_COUNT));
        }
        if !(1..=rows).contains(&self.row) {
            return Err(Error::RowOutOfBounds(self.row.into(), rows));
        }
        Ok(())
    }

    /// Column letter for this address ('A' for column 1)
    pub fn column_letter(&self) -> char {
        (b'A' + self.col.saturating_sub(1)) as char
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_address_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(1, 1));
        assert_eq!(CellAddress::parse("B2").unwrap(), CellAddress::new(2, 2));
        assert_eq!(CellAddress::parse("Z100").unwrap(), CellAddress::new(100, 26));

        // Surrounding whitespace is tolerated
        assert_eq!(CellAddress::parse("  C3\t").unwrap(), CellAddress::new(3, 3));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        for bad in ["", "A", "1", "a1", "AA1", "A0", "A01", "A 1", "A1B", "$A$1", "Ä1"] {
            let err = CellAddress::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "input {bad:?}");
        }
    }

    #[test]
    fn test_huge_row_is_range_error() {
        let err = CellAddress::parse("A99999999999999999999999").unwrap_err();
        assert_eq!(err, Error::RowOutOfBounds(u64::MAX, u32::MAX));
    }

    #[test]
    fn test_parse_within() {
        assert_eq!(CellAddress::parse_within("A3", 3).unwrap(), CellAddress::new(3, 1));
        assert_eq!(
            CellAddress::parse_within("A4", 3).unwrap_err(),
            Error::RowOutOfBounds(4, 3)
        );
        // Format errors win over bounds
        assert_eq!(
            CellAddress::parse_within("A0", 3).unwrap_err().kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_check_bounds() {
        assert!(CellAddress::new(1, 26).check_bounds(1).is_ok());
        assert_eq!(
            CellAddress::new(1, 27).check_bounds(1).unwrap_err(),
            Error::ColumnOutOfBounds(27, 26)
        );
        assert_eq!(
            CellAddress::new(0, 1).check_bounds(5).unwrap_err(),
            Error::RowOutOfBounds(0, 5)
        );
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(1, 1).to_string(), "A1");
        assert_eq!(CellAddress::new(100, 3).to_string(), "C100");
        assert_eq!(CellAddress::new(7, 26).to_string(), "Z7");
        assert_eq!("Q17".parse::<CellAddress>().unwrap().to_string(), "Q17");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let addr = CellAddress::new(4, 2);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#"{"row":4,"col":2}"#);
        let back: CellAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
