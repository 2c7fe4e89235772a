//! Cell storage implementation
//!
//! Sparse storage for spreadsheet cells. Only non-zero cells are stored,
//! using a row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::CellAddress;

/// Sparse row-based storage for integer cells
///
/// Structure: `BTreeMap<row, BTreeMap<col, value>>`
///
/// A zero value is never stored; writing zero removes the entry, so an
/// absent cell and a zeroed cell are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStorage {
    /// Row → column map
    rows: BTreeMap<u32, BTreeMap<u8, u32>>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell value, 0 if absent
    pub fn get(&self, row: u32, col: u8) -> u32 {
        self.rows
            .get(&row)
            .and_then(|r| r.get(&col))
            .copied()
            .unwrap_or(0)
    }

    /// Check whether a cell has a stored (non-zero) value
    pub fn contains(&self, row: u32, col: u8) -> bool {
        self.rows.get(&row).is_some_and(|r| r.contains_key(&col))
    }

    /// Set a cell value
    ///
    /// Setting 0 removes the cell.
    pub fn set(&mut self, row: u32, col: u8, value: u32) {
        if value == 0 {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, value);
        }
    }

    /// Remove a cell, returning its previous value if one was stored
    pub fn remove(&mut self, row: u32, col: u8) -> Option<u32> {
        let row_map = self.rows.get_mut(&row)?;
        let result = row_map.remove(&col);

        // Clean up empty rows
        if row_map.is_empty() {
            self.rows.remove(&row);
        }

        result
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over stored cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, u32)> + '_ {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, &value)| (CellAddress::new(row, col), value))
        })
    }
}
