//! Formula parser
//!
//! The grammar is deliberately narrow: `=<operand>+<operand>`, where each
//! operand is a digit-only literal or a single-letter cell reference.
//! Whitespace around `=`, `+` and either operand is ignored. More than one
//! `+` is always an error; chained addition is not supported.

use crate::ast::{Formula, Operand};
use crate::error::{FormulaError, FormulaResult};
use mini_sheets_core::{CellAddress, MAX_CELL_VALUE};

/// Parse a formula string
///
/// # Example
/// ```rust
/// use mini_sheets_formula::{parse_formula, Operand};
/// use mini_sheets_core::CellAddress;
///
/// let formula = parse_formula("= A1 + 3").unwrap();
/// assert_eq!(formula.left, Operand::Cell(CellAddress::new(1, 1)));
/// assert_eq!(formula.right, Operand::Literal(3));
///
/// assert!(parse_formula("=A1+A2+A3").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<Formula> {
    let (left, right) = split_formula(formula)?;
    Ok(Formula::new(parse_operand(left)?, parse_operand(right)?))
}

/// Split a formula into its two raw operand tokens
///
/// Checks the `=` prefix and the single `+`; the tokens themselves are
/// returned untrimmed and unparsed.
pub fn split_formula(formula: &str) -> FormulaResult<(&str, &str)> {
    let body = formula
        .trim()
        .strip_prefix('=')
        .ok_or_else(|| FormulaError::Parse("Formula must start with '='".into()))?;

    let parts: Vec<&str> = body.split('+').collect();
    let [left, right] = parts.as_slice() else {
        return Err(FormulaError::Parse(format!(
            "Expected exactly one '+', found {} in '{}'",
            parts.len() - 1,
            body
        )));
    };

    Ok((left, right))
}

/// Parse a single operand token
///
/// All-digit tokens are literals; everything else must be a cell reference.
/// A blank token is an invalid cell reference, never zero.
pub fn parse_operand(token: &str) -> FormulaResult<Operand> {
    let token = token.trim();

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<u32>()
            .ok()
            .filter(|n| *n <= MAX_CELL_VALUE)
            .map(Operand::Literal)
            .ok_or_else(|| FormulaError::LiteralOutOfRange(token.to_string()));
    }

    Ok(Operand::Cell(CellAddress::parse(token)?))
}
