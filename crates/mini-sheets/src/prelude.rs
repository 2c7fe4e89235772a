//! Prelude module - common imports for mini-sheets users
//!
//! ```rust
//! use mini_sheets::prelude::*;
//! ```

pub use crate::{
    CellAddress,
    // Error types
    Error,
    ErrorKind,
    FormulaError,
    FormulaResult,
    Result,
    // Main types
    Spreadsheet,
    // Extension traits
    SpreadsheetFormulaExt,
    // Constants
    COLUMN_COUNT,
    MAX_CELL_VALUE,
};
