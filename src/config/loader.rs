//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--config <path>`, or `.calc.toml` in the working directory
//! 4. `~/.config/calc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_DECIMAL_PLACES, ENV_COLOR, ENV_DECIMAL_PLACES,
    ENV_FORMAT, MAX_DECIMAL_PLACES,
};
use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("decimal_places in {path} must be at most {max}, got {value}", max = MAX_DECIMAL_PLACES)]
    DecimalPlaces { path: PathBuf, value: u8 },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub decimal_places: u8,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            color: true,
        }
    }
}

/// One config file as written on disk. Keys left out of the file stay
/// `None` and leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub output: OutputLayer,
}

/// The `[output]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
    pub decimal_places: Option<u8>,
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` is a file named on the command line and must exist; it
    /// replaces the lookup of `.calc.toml` in `working_dir`.
    pub fn load(
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), explicit, working_dir, env)
    }

    /// Layering with the global config path supplied by the caller.
    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge(Self::load_file(global_path)?);
            }
        }

        // Layer 3: explicit or local config
        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                if let Some(dir) = working_dir {
                    let local_path = dir.join(CONFIG_FILENAME);
                    if local_path.exists() {
                        config.merge(Self::load_file(&local_path)?);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config file layer from a specific path.
    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layer: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(value) = layer.output.decimal_places.filter(|v| *v > MAX_DECIMAL_PLACES) {
            return Err(ConfigError::DecimalPlaces {
                path: path.to_path_buf(),
                value,
            });
        }
        debug!(path = %path.display(), "loaded config file");
        Ok(layer)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key the file layer sets, including ones equal to the default.
    fn merge(&mut self, layer: ConfigFile) {
        let OutputLayer {
            format,
            decimal_places,
            color,
        } = layer.output;
        if let Some(format) = format {
            self.output.format = format;
        }
        if let Some(places) = decimal_places {
            self.output.decimal_places = places;
        }
        if let Some(color) = color {
            self.output.color = color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_DECIMAL_PLACES) {
            match val.trim().parse::<u8>() {
                Ok(places) if places <= MAX_DECIMAL_PLACES => self.output.decimal_places = places,
                _ => warn!("ignoring invalid {ENV_DECIMAL_PLACES} value: {val}"),
            }
        }
        match env.flag(ENV_COLOR) {
            Some(Ok(enabled)) => self.output.color = enabled,
            Some(Err(val)) => warn!("ignoring invalid {ENV_COLOR} value: {val}"),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert_eq!(config.output.decimal_places, 2);
        assert!(config.output.color);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[output]
format = "json"
decimal_places = 4
color = false
"#;
        let layer: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(layer.output.format, Some(OutputFormat::Json));
        assert_eq!(layer.output.decimal_places, Some(4));
        assert_eq!(layer.output.color, Some(false));
    }

    #[test]
    fn parse_partial_toml_leaves_keys_unset() {
        let layer: ConfigFile = toml::from_str("[output]\ndecimal_places = 3\n").unwrap();
        assert_eq!(layer.output.format, None);
        assert_eq!(layer.output.decimal_places, Some(3));
        assert_eq!(layer.output.color, None);

        let empty: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(empty, ConfigFile::default());
    }

    #[test]
    fn merge_applies_set_keys() {
        let mut base = Config::default();
        let layer: ConfigFile =
            toml::from_str("[output]\nformat = \"json\"\ndecimal_places = 6\ncolor = false\n")
                .unwrap();

        base.merge(layer);

        assert_eq!(base.output.format, OutputFormat::Json);
        assert_eq!(base.output.decimal_places, 6);
        assert!(!base.output.color);
    }

    #[test]
    fn merge_keeps_base_for_unset_keys() {
        let mut base = Config::default();
        base.output.format = OutputFormat::Json;
        base.output.decimal_places = 5;
        base.output.color = false;

        base.merge(ConfigFile::default());

        assert_eq!(base.output.format, OutputFormat::Json);
        assert_eq!(base.output.decimal_places, 5);
        assert!(!base.output.color);
    }

    #[test]
    fn merge_can_restore_default_values() {
        let mut base = Config::default();
        base.output.format = OutputFormat::Json;
        base.output.decimal_places = 5;
        base.output.color = false;

        let layer: ConfigFile = toml::from_str(
            "[output]\nformat = \"terminal\"\ndecimal_places = 2\ncolor = true\n",
        )
        .unwrap();
        base.merge(layer);

        assert_eq!(base.output, OutputConfig::default());
    }

    #[test]
    fn local_file_overrides_global_with_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        std::fs::write(
            &global,
            "[output]\nformat = \"json\"\ndecimal_places = 5\ncolor = false\n",
        )
        .unwrap();
        let work = dir.path().join("work");
        std::fs::create_dir(&work).unwrap();
        std::fs::write(
            work.join(CONFIG_FILENAME),
            "[output]\nformat = \"terminal\"\ndecimal_places = 2\ncolor = true\n",
        )
        .unwrap();

        let config = Config::load_layers(Some(&global), None, Some(&work), &no_env()).unwrap();
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn global_values_survive_partial_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        std::fs::write(&global, "[output]\nformat = \"json\"\ndecimal_places = 5\n").unwrap();
        let work = dir.path().join("work");
        std::fs::create_dir(&work).unwrap();
        std::fs::write(work.join(CONFIG_FILENAME), "[output]\ndecimal_places = 3\n").unwrap();

        let config = Config::load_layers(Some(&global), None, Some(&work), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.decimal_places, 3);
    }

    #[test]
    fn env_vars_override_config() {
        let mut config = Config::default();
        let env = Env::mock([
            (ENV_FORMAT, "json"),
            (ENV_DECIMAL_PLACES, "3"),
            (ENV_COLOR, "off"),
        ]);
        config.apply_env_vars(&env);

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.decimal_places, 3);
        assert!(!config.output.color);
    }

    #[test]
    fn invalid_env_vars_are_ignored() {
        let mut config = Config::default();
        let env = Env::mock([
            (ENV_FORMAT, "yaml"),
            (ENV_DECIMAL_PLACES, "99"),
            (ENV_COLOR, "sometimes"),
        ]);
        config.apply_env_vars(&env);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_local_config_from_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_layers(None, None, Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_config_replaces_local_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[output]\ndecimal_places = 7\n").unwrap();

        let config = Config::load_layers(None, Some(&explicit), Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.output.decimal_places, 7);
        assert_eq!(config.output.format, OutputFormat::Terminal);
    }

    #[test]
    fn env_beats_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[output]\ndecimal_places = 4\n",
        )
        .unwrap();

        let env = Env::mock([(ENV_DECIMAL_PLACES, "1")]);
        let config = Config::load_layers(None, None, Some(dir.path()), &env).unwrap();
        assert_eq!(config.output.decimal_places, 1);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load_layers(None, Some(&missing), None, &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        let err = Config::load_layers(None, Some(&path), None, &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }

    #[test]
    fn decimal_places_upper_bound_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.toml");
        std::fs::write(&path, "[output]\ndecimal_places = 40\n").unwrap();

        let err = Config::load_layers(None, Some(&path), None, &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::DecimalPlaces { value: 40, .. }));
    }
}
