//! Error types for mini-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a failure
///
/// Every error in the workspace maps onto one of these kinds, so callers
/// can branch on the category without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed cell reference or formula text
    Format,
    /// Row, column, value or literal outside its declared bounds
    Range,
    /// Input is not of the expected primitive kind
    Type,
}

/// Errors that can occur in mini-sheets-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cell reference does not match `<A-Z><row>`
    #[error("Invalid cell address: {0:?}")]
    InvalidAddress(String),

    /// Row number outside `1..=max`
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u64, u32),

    /// Column number outside `1..=max`
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u8, u8),

    /// Cell value outside `0..=max`
    #[error("Value {0} out of range [0, {1}]")]
    ValueOutOfRange(i64, u32),

    /// Spreadsheet constructed with no rows
    #[error("Row count must be positive, got {0}")]
    InvalidRowCount(u32),

    /// Invalid value type for operation
    #[error("Invalid value type: expected {expected}, got {actual:?}")]
    InvalidValueType {
        expected: &'static str,
        actual: String,
    },
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAddress(_) => ErrorKind::Format,
            Error::RowOutOfBounds(..)
            | Error::ColumnOutOfBounds(..)
            | Error::ValueOutOfRange(..)
            | Error::InvalidRowCount(_) => ErrorKind::Range,
            Error::InvalidValueType { .. } => ErrorKind::Type,
        }
    }
}
