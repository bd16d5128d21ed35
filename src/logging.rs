//! Diagnostic logging.
//!
//! Installs a `tracing-subscriber` fmt layer that writes to stderr, so the
//! single result line on stdout is never interleaved with log output.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Filter used when neither `CALC_LOG` nor `--verbose` is given.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: `CALC_LOG` wins, then `--verbose`.
pub fn filter_directive(verbose: bool, env: &Env) -> String {
    match env.var(ENV_LOG) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialise the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool, env: &Env) {
    let directive = filter_directive(verbose, env);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
