//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`GRADECURVE_*`)
//! 2. Config file (`--config`, `GRADECURVE_CONFIG`, or `~/.gradecurve/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Worksheet name used when none is configured.
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Input workbook configuration.
    pub input: InputConfig,

    /// Output workbook configuration.
    pub output: OutputConfig,
}

/// Input workbook configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Worksheet holding the roster.
    pub sheet: String,

    /// What to do with numeric cells that fail to parse.
    pub cells: CellPolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            cells: CellPolicy::default(),
        }
    }
}

/// Output workbook configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Worksheet name to write.
    pub sheet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
        }
    }
}

/// Handling of unparseable numeric cells.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellPolicy {
    /// Read the cell as 0 and log a warning (default).
    #[default]
    Coerce,

    /// Abort the load.
    Reject,
}

/// Get the default gradecurve home directory.
fn default_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".gradecurve"), |h| h.join(".gradecurve"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// `explicit` is a path given on the command line; unlike the default
/// locations it must exist.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => get_config_path(),
    };

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        config = parse_config(&contents)?;
        tracing::debug!(path = %config_path.display(), "loaded config file");
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Parse a TOML config document.
///
/// # Errors
///
/// Returns [`Error::Config`] if the document is not valid configuration.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("GRADECURVE_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("GRADECURVE_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(sheet) = env::var("GRADECURVE_SHEET") {
        config.input.sheet = sheet;
    }

    if let Ok(policy) = env::var("GRADECURVE_CELLS") {
        match policy.to_lowercase().as_str() {
            "coerce" => config.input.cells = CellPolicy::Coerce,
            "reject" => config.input.cells = CellPolicy::Reject,
            other => tracing::warn!(value = other, "ignoring unknown GRADECURVE_CELLS"),
        }
    }

    if let Ok(sheet) = env::var("GRADECURVE_OUTPUT_SHEET") {
        config.output.sheet = sheet;
    }
}
