//! Formula syntax tree types

use mini_sheets_core::CellAddress;
use std::fmt;

/// One side of an addition formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Non-negative integer literal, already range-checked
    Literal(u32),
    /// Cell reference, format-checked but not yet bounds-checked
    Cell(CellAddress),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(n) => write!(f, "{n}"),
            Operand::Cell(addr) => write!(f, "{addr}"),
        }
    }
}

/// A parsed `=<left>+<right>` formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    pub left: Operand,
    pub right: Operand,
}

impl Formula {
    /// Create a formula from its two operands
    pub fn new(left: Operand, right: Operand) -> Self {
        Self { left, right }
    }

    /// Cell references used by this formula, left to right
    pub fn references(&self) -> impl Iterator<Item = CellAddress> {
        [self.left, self.right]
            .into_iter()
            .filter_map(|operand| match operand {
                Operand::Cell(addr) => Some(addr),
                Operand::Literal(_) => None,
            })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}+{}", self.left, self.right)
    }
}
