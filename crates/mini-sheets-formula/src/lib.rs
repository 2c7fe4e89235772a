//! # mini-sheets-formula
//!
//! Formula parser and evaluator for mini-sheets.
//!
//! Formulas have exactly one shape, `=<operand>+<operand>`, where each
//! operand is an integer literal in `0..=100000` or a cell reference.
//!
//! ## Example
//!
//! ```rust
//! use mini_sheets_core::Spreadsheet;
//! use mini_sheets_formula::{evaluate, parse_formula};
//!
//! let mut sheet = Spreadsheet::new(5).unwrap();
//! sheet.assign("C3", 9).unwrap();
//!
//! let formula = parse_formula("=1 + C3").unwrap();
//! assert_eq!(evaluate(&formula, &sheet).unwrap(), 10);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{Formula, Operand};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_str, CellSource};
pub use parser::{parse_formula, parse_operand, split_formula};
