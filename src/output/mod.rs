//! Output renderers: human-readable terminal line and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dispatch::CalcError;
use crate::models::Evaluation;

/// The outcome of one evaluation cycle, as handed to a renderer.
pub type Outcome = Result<Evaluation, CalcError>;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Result: <value>` or an error line.
    #[default]
    Terminal,
    /// A single JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

/// Trait for rendering an evaluation outcome to a single output line.
pub trait OutputRenderer {
    /// Render the outcome, without a trailing newline.
    fn render(&self, outcome: &Outcome) -> String;
}

/// Build the renderer for `format`.
pub fn renderer_for(format: OutputFormat, decimal_places: u8, color: bool) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer {
            decimal_places,
            color,
        }),
        OutputFormat::Json => Box::new(json::JsonRenderer { decimal_places }),
    }
}
