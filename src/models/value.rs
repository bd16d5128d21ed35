//! Evaluation results.

use serde::Serialize;
use std::fmt;

use crate::constants::DEFAULT_DECIMAL_PLACES;

/// The numeric result of an evaluation.
///
/// Addition, subtraction and multiplication produce integers; division
/// always produces a real, even when the quotient is exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl fmt::Display for Value {
    /// Integers print as-is. Reals print with the formatter's precision,
    /// or two decimal places when none is given (`{:.4}` prints four).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => {
                let places = f.precision().unwrap_or(DEFAULT_DECIMAL_PLACES as usize);
                write!(f, "{r:.places$}")
            }
        }
    }
}
