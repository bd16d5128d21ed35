//! Command dispatcher: parse one `<int> <op> <int>` line and route it to
//! the arithmetic library.

pub mod parser;

use thiserror::Error;
use tracing::debug;

use crate::arith::{self, ArithError};
use crate::models::{Evaluation, Expression, Operator, Value};

pub use parser::InputError;

/// Everything that can end an evaluation without a result.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Error reading input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid operation: '{0}'")]
    InvalidOperator(String),

    #[error("Error: {0}")]
    Arithmetic(#[from] ArithError),
}

impl CalcError {
    /// Stable machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Input(_) => "input_format",
            CalcError::InvalidOperator(_) => "invalid_operator",
            CalcError::Arithmetic(ArithError::DivisionByZero) => "division_by_zero",
        }
    }

    /// The message without the class prefix used by `Display`.
    pub fn detail(&self) -> String {
        match self {
            CalcError::Input(e) => e.to_string(),
            CalcError::InvalidOperator(token) => format!("unknown operator '{token}'"),
            CalcError::Arithmetic(e) => e.to_string(),
        }
    }
}

/// Apply the expression's operator to its operands.
pub fn apply(expr: &Expression) -> Result<Value, ArithError> {
    let Expression { lhs, operator, rhs } = *expr;
    let value = match operator {
        Operator::Add => Value::Integer(arith::add(lhs, rhs)),
        Operator::Subtract => Value::Integer(arith::subtract(lhs, rhs)),
        Operator::Multiply => Value::Integer(arith::multiply(lhs, rhs)),
        Operator::Divide => Value::Real(arith::divide(lhs, rhs)?),
    };
    Ok(value)
}

/// Parse and evaluate a single input line.
pub fn evaluate_line(line: &str) -> Result<Evaluation, CalcError> {
    let expression = parser::parse_expression(line)?;
    debug!(%expression, "parsed expression");

    let value = apply(&expression)?;
    debug!(%value, "evaluated expression");

    Ok(Evaluation { expression, value })
}
