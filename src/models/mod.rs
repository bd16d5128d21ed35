//! Shared types used across all modules.
//!
//! The parser produces an [`Expression`], the dispatcher turns it into an
//! [`Evaluation`], and renderers consume that. Other modules import from
//! here rather than reaching into each other's internals.

pub mod operator;
pub mod value;

use serde::Serialize;
use std::fmt;

pub use operator::Operator;
pub use value::Value;

/// A parsed `<int> <op> <int>` input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub lhs: i64,
    pub operator: Operator,
    pub rhs: i64,
}

impl Expression {
    pub fn new(lhs: i64, operator: Operator, rhs: i64) -> Self {
        Self { lhs, operator, rhs }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// A successfully evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub expression: Expression,
    pub value: Value,
}
