//! Terminal renderer: `Result: <value>` or a one-line error.

use colored::Colorize;

use crate::output::{OutputRenderer, Outcome};

/// Plain-text renderer, optionally coloured.
pub struct TerminalRenderer {
    /// Decimal places for real results.
    pub decimal_places: u8,
    /// Apply ANSI styling.
    pub color: bool,
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Ok(eval) => {
                let value = format!("{:.*}", self.decimal_places as usize, eval.value);
                if self.color {
                    format!("{} {}", "Result:".dimmed(), value.bold())
                } else {
                    format!("Result: {value}")
                }
            }
            Err(err) => {
                if self.color {
                    err.to_string().red().to_string()
                } else {
                    err.to_string()
                }
            }
        }
    }
}
