//! The closed set of supported operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Arithmetic operator selected by a single input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// The token that selects this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// All operator symbols joined with `sep`, in declaration order.
    pub fn symbols(sep: &str) -> String {
        Operator::iter()
            .map(Operator::symbol)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = String;

    /// Exact match on the token; no trimming or aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("unknown operator: {s}"))
    }
}
