//! # mini-sheets
//!
//! A minimal spreadsheet: 26 columns (A-Z), a fixed number of rows, and
//! cells holding integers in `0..=100000`. Formulas add exactly two
//! operands, each a literal or a cell reference.
//!
//! ## Example
//!
//! ```rust
//! use mini_sheets::prelude::*;
//!
//! let mut sheet = Spreadsheet::new(5).unwrap();
//! sheet.assign("C3", 9).unwrap();
//! assert_eq!(sheet.evaluate("=1 + C3").unwrap(), 10);
//! assert_eq!(sheet.evaluate("=C3+1").unwrap(), 10);
//!
//! // Unset cells read as zero
//! assert_eq!(sheet.evaluate("=A1+A2").unwrap(), 0);
//!
//! // Only a single '+' is accepted
//! let err = sheet.evaluate("=A1+A2+A3").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Format);
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::SpreadsheetFormulaExt;

// Re-export core types
pub use mini_sheets_core::{
    CellAddress,
    CellStorage,
    // Error types
    Error,
    ErrorKind,
    Result,
    // Main types
    Spreadsheet,
    // Constants
    COLUMN_COUNT,
    MAX_CELL_VALUE,
};

// Re-export formula types
pub use mini_sheets_formula::{
    evaluate, evaluate_str, parse_formula, parse_operand, split_formula, CellSource, Formula,
    FormulaError, FormulaResult, Operand,
};
