//! Formula evaluation on a spreadsheet
//!
//! # Example
//!
//! ```rust
//! use mini_sheets::prelude::*;
//!
//! let mut sheet = Spreadsheet::new(10).unwrap();
//! sheet.assign("A1", 7).unwrap();
//! sheet.assign("B2", 5).unwrap();
//! assert_eq!(sheet.evaluate("=A1 + B2").unwrap(), 12);
//! ```

use crate::{evaluate_str, FormulaResult, Spreadsheet};

/// Extension trait for Spreadsheet to add formula evaluation
pub trait SpreadsheetFormulaExt {
    /// Evaluate an `=<operand>+<operand>` formula against this sheet
    ///
    /// Never modifies the sheet.
    fn evaluate(&self, formula: &str) -> FormulaResult<u64>;
}

impl SpreadsheetFormulaExt for Spreadsheet {
    fn evaluate(&self, formula: &str) -> FormulaResult<u64> {
        evaluate_str(formula, self)
    }
}
