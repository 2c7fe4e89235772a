//! Formula error types

use mini_sheets_core::{Error as CoreError, ErrorKind};
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Formula is not of the form `=<operand>+<operand>`
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric literal above the cell value limit
    #[error("Literal {0} exceeds {max}", max = mini_sheets_core::MAX_CELL_VALUE)]
    LiteralOutOfRange(String),

    /// Operand is not a valid cell reference for the sheet
    #[error("Invalid reference: {0}")]
    Reference(#[from] CoreError),
}

impl FormulaError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::Parse(_) => ErrorKind::Format,
            FormulaError::LiteralOutOfRange(_) => ErrorKind::Range,
            FormulaError::Reference(e) => e.kind(),
        }
    }
}
