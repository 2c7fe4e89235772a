//! # mini-sheets-core
//!
//! Core data structures for the mini-sheets spreadsheet library.
//!
//! This crate provides:
//! - [`CellAddress`] - Cell addressing (`A1` through `Z<rows>`)
//! - [`CellStorage`] - Sparse storage where absent cells read as zero
//! - [`Spreadsheet`] - The bounded grid of non-negative integers
//!
//! ## Example
//!
//! ```rust
//! use mini_sheets_core::Spreadsheet;
//!
//! let mut sheet = Spreadsheet::new(10).unwrap();
//! sheet.assign("A1", 7).unwrap();
//! assert_eq!(sheet.read("A1").unwrap(), 7);
//! assert_eq!(sheet.read("B2").unwrap(), 0);
//!
//! sheet.reset("A1").unwrap();
//! assert!(sheet.is_empty());
//! ```

pub mod cell;
pub mod error;
pub mod spreadsheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellStorage};
pub use error::{Error, ErrorKind, Result};
pub use spreadsheet::Spreadsheet;

/// Number of columns in every spreadsheet (A-Z)
pub const COLUMN_COUNT: u8 = 26;

/// Largest value a cell or formula literal may hold
pub const MAX_CELL_VALUE: u32 = 100_000;
