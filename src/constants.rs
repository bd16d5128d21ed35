//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calc";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.calc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calc.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calc";

/// Decimal places used for real results unless configured otherwise.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Upper bound accepted for `decimal_places`.
pub const MAX_DECIMAL_PLACES: u8 = 20;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CALC_FORMAT";
pub const ENV_DECIMAL_PLACES: &str = "CALC_DECIMAL_PLACES";
pub const ENV_COLOR: &str = "CALC_COLOR";
pub const ENV_LOG: &str = "CALC_LOG";
