//! Input line reading and `<int> <op> <int>` parsing.

use std::io::BufRead;
use std::num::IntErrorKind;

use thiserror::Error;

use super::CalcError;
use crate::models::{Expression, Operator};

/// Malformed or missing input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("expected `<int> <op> <int>`, found {found} token(s)")]
    WrongTokenCount { found: usize },

    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("integer '{0}' is out of range")]
    IntegerOutOfRange(String),

    #[error("unexpected end of input")]
    EndOfInput,

    #[error("{0}")]
    Read(#[from] std::io::Error),
}

/// Read a single line, without its line terminator.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Parse one input line into an [`Expression`].
///
/// Token count and both operands are checked before the operator, so a
/// line with a bad operand is an input error even if its operator is also
/// unknown.
pub fn parse_expression(line: &str) -> Result<Expression, CalcError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[lhs, op, rhs] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount { found: tokens.len() }.into());
    };

    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let operator = op
        .parse::<Operator>()
        .map_err(|_| CalcError::InvalidOperator(op.to_string()))?;

    Ok(Expression::new(lhs, operator, rhs))
}

/// Parse a decimal integer operand, with an optional leading sign.
fn parse_operand(token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::IntegerOutOfRange(token.to_string())
        }
        _ => InputError::InvalidInteger(token.to_string()),
    })
}
