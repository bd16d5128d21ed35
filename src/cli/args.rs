//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use calc::config::Config;
use calc::constants::MAX_DECIMAL_PLACES;
use calc::output::OutputFormat;

/// Evaluate one `<int> <op> <int>` expression, where op is one of + - * /.
///
/// Reads the expression from stdin unless it is given as arguments.
#[derive(Parser, Debug)]
#[command(name = calc::constants::APP_NAME, version = calc::constants::VERSION)]
pub struct Cli {
    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Decimal places for division results (default: 2).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_DECIMAL_PLACES as i64))]
    pub decimal_places: Option<u8>,

    /// Disable coloured output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Do not print the banner and prompt.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Read settings from this file instead of `.calc.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Expression to evaluate, e.g. `calc 7 / 3`. Must come after any options.
    #[arg(
        value_name = "EXPR",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub expression: Vec<String>,
}

impl Cli {
    /// The expression given on the command line, if any.
    pub fn inline_expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }

    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(places) = self.decimal_places {
            config.output.decimal_places = places;
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}
