//! Formula evaluator
//!
//! Resolves the operands of a parsed [`Formula`] against a [`CellSource`]
//! and returns their sum.

use crate::ast::{Formula, Operand};
use crate::error::FormulaResult;
use crate::parser::{parse_operand, split_formula};
use mini_sheets_core::{CellAddress, Spreadsheet};

/// Read access to a bounded grid of cell values
pub trait CellSource {
    /// Number of rows a reference may address
    fn row_count(&self) -> u32;

    /// Value at an in-bounds address, 0 if unset
    fn value_at(&self, addr: CellAddress) -> u32;
}

impl CellSource for Spreadsheet {
    fn row_count(&self) -> u32 {
        Spreadsheet::row_count(self)
    }

    fn value_at(&self, addr: CellAddress) -> u32 {
        Spreadsheet::value_at(self, addr)
    }
}

/// Evaluate a parsed formula
///
/// The result is not capped; only the operands are bounded.
pub fn evaluate<S: CellSource + ?Sized>(formula: &Formula, source: &S) -> FormulaResult<u64> {
    let left = resolve(&formula.left, source)?;
    let right = resolve(&formula.right, source)?;
    log::trace!("{formula} = {left} + {right}");
    Ok(left + right)
}

/// Parse and evaluate a formula string in one step
///
/// Operands are handled left to right: the left operand is parsed and
/// bounds-checked before the right one is looked at, so an error in the
/// left operand takes precedence.
pub fn evaluate_str<S: CellSource + ?Sized>(formula: &str, source: &S) -> FormulaResult<u64> {
    let (left, right) = split_formula(formula)?;
    let left = resolve(&parse_operand(left)?, source)?;
    let right = resolve(&parse_operand(right)?, source)?;
    log::trace!("{} = {left} + {right}", formula.trim());
    Ok(left + right)
}

fn resolve<S: CellSource + ?Sized>(operand: &Operand, source: &S) -> FormulaResult<u64> {
    match *operand {
        Operand::Literal(n) => Ok(n.into()),
        Operand::Cell(addr) => {
            addr.check_bounds(source.row_count())?;
            Ok(source.value_at(addr).into())
        }
    }
}
