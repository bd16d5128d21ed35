//! calc — single-shot integer calculator.
//!
//! Entry point and error handling boundary. Evaluation errors become the
//! output line; anything else (config, I/O on stdout) goes through `anyhow`
//! and ends the process with status 2.

mod cli;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use calc::config::Config;
use calc::dispatch::{self, CalcError, parser};
use calc::env::Env;
use calc::logging;
use calc::output::{self, Outcome};

use cli::args::Cli;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, &env);

    let working_dir = std::env::current_dir().ok();
    let mut config = Config::load(cli.config.as_deref(), working_dir.as_deref(), &env)
        .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    debug!(?config, "resolved configuration");

    let outcome = evaluate(&cli, config.output.color)?;

    let color = config.output.color && io::stdout().is_terminal();
    let renderer = output::renderer_for(config.output.format, config.output.decimal_places, color);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", renderer.render(&outcome)).context("failed to write result")?;
    stdout.flush().context("failed to write result")?;

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run the single read-evaluate cycle.
fn evaluate(cli: &Cli, color: bool) -> Result<Outcome> {
    if let Some(line) = cli.inline_expression() {
        return Ok(dispatch::evaluate_line(&line));
    }

    let stdin = io::stdin();
    if !cli.quiet && stdin.is_terminal() {
        let mut stderr = io::stderr();
        let color = color && stderr.is_terminal();
        cli::print_banner(&mut stderr, color).context("failed to write prompt")?;
    }

    Ok(parser::read_line(&mut stdin.lock())
        .map_err(CalcError::from)
        .and_then(|line| dispatch::evaluate_line(&line)))
}
