//! CLI argument parsing and the interactive banner.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::Write;

use calc::models::Operator;

/// Prompt shown before reading the expression from stdin.
pub fn prompt_text() -> String {
    format!("Enter a op({}) b", Operator::symbols(","))
}

/// Print the banner and prompt to `out`.
///
/// Callers pass stderr so that stdout carries only the result line.
pub fn print_banner<W: Write>(out: &mut W, color: bool) -> std::io::Result<()> {
    use colored::Colorize;

    if color {
        writeln!(out, "{}", "Calculator".bold())?;
        writeln!(out, "{}", prompt_text().dimmed())?;
    } else {
        writeln!(out, "Calculator")?;
        writeln!(out, "{}", prompt_text())?;
    }
    out.flush()
}
