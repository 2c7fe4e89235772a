//! Spreadsheet type

use crate::cell::{CellAddress, CellStorage};
use crate::error::{Error, Result};
use crate::{COLUMN_COUNT, MAX_CELL_VALUE};
use lazy_regex::regex_is_match;
use std::num::IntErrorKind;

/// A 26-column grid of bounded non-negative integers
///
/// The row count is fixed at construction. Cells hold values in
/// `0..=MAX_CELL_VALUE`; unset cells read as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spreadsheet {
    /// Number of rows, fixed for the lifetime of the sheet
    rows: u32,
    /// Non-zero cells
    cells: CellStorage,
}

impl Spreadsheet {
    /// Create a new spreadsheet with `rows` rows
    ///
    /// Fails with [`Error::InvalidRowCount`] if `rows` is 0.
    pub fn new(rows: u32) -> Result<Self> {
        if rows == 0 {
            return Err(Error::InvalidRowCount(rows));
        }
        log::debug!("Created spreadsheet with {rows} rows");
        Ok(Self {
            rows,
            cells: CellStorage::new(),
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Number of columns (always [`COLUMN_COUNT`])
    pub fn column_count(&self) -> u8 {
        COLUMN_COUNT
    }

    /// Parse a cell reference and check it against this sheet's bounds
    pub fn resolve(&self, cell: &str) -> Result<CellAddress> {
        CellAddress::parse_within(cell, self.rows)
    }

    /// Set a cell's value
    ///
    /// `value` must lie in `0..=MAX_CELL_VALUE`. Assigning 0 clears the cell.
    /// Nothing is modified if validation fails.
    pub fn assign(&mut self, cell: &str, value: i64) -> Result<()> {
        let value = u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_CELL_VALUE)
            .ok_or(Error::ValueOutOfRange(value, MAX_CELL_VALUE))?;
        let addr = self.resolve(cell)?;

        log::debug!("Assign {addr} = {value}");
        self.cells.set(addr.row, addr.col, value);
        Ok(())
    }

    /// Set a cell's value from text input such as `"42"`
    ///
    /// The trimmed text must be a decimal integer (optionally negative);
    /// anything else is [`Error::InvalidValueType`]. The parsed integer is
    /// then assigned with the same rules as [`Spreadsheet::assign`].
    pub fn assign_input(&mut self, cell: &str, input: &str) -> Result<()> {
        let text = input.trim();
        if !regex_is_match!(r"^-?[0-9]+$", text) {
            return Err(Error::InvalidValueType {
                expected: "integer",
                actual: input.to_string(),
            });
        }
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                let saturated = match e.kind() {
                    IntErrorKind::PosOverflow => i64::MAX,
                    IntErrorKind::NegOverflow => i64::MIN,
                    _ => {
                        return Err(Error::InvalidValueType {
                            expected: "integer",
                            actual: input.to_string(),
                        })
                    }
                };
                return Err(Error::ValueOutOfRange(saturated, MAX_CELL_VALUE));
            }
        };
        self.assign(cell, value)
    }

    /// Clear a cell
    ///
    /// Clearing a cell that holds no value is a no-op.
    pub fn reset(&mut self, cell: &str) -> Result<()> {
        let addr = self.resolve(cell)?;
        if let Some(previous) = self.cells.remove(addr.row, addr.col) {
            log::debug!("Reset {addr} (was {previous})");
        }
        Ok(())
    }

    /// Read a cell's value, 0 if unset
    pub fn read(&self, cell: &str) -> Result<u32> {
        let addr = self.resolve(cell)?;
        Ok(self.value_at(addr))
    }

    /// Read the value at an already-validated address
    pub fn value_at(&self, addr: CellAddress) -> u32 {
        self.cells.get(addr.row, addr.col)
    }

    /// Number of cells holding a non-zero value
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check whether every cell reads as zero
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over non-zero cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, u32)> + '_ {
        self.cells.iter()
    }

    /// Clear every cell. The row count is unchanged.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
