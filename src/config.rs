//! Configuration file support for nbs-audit.
//!
//! Provides TOML-based configuration through `nbs-audit.toml` files,
//! including data structures, file loading, and validation. Command-line
//! flags always override config values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "nbs-audit.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Local archive mirror root (the directory containing dists/)
    pub archive: Option<String>,
    /// Suite to audit
    pub suite: Option<String>,
    /// Default output format: "text" or "json"
    pub format: Option<String>,
    /// CSV file receiving one time-series summary line per run
    pub history: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(suite) = &config.suite {
        if suite.trim().is_empty() {
            anyhow::bail!(
                "Invalid config: 'suite' must not be empty.\n\n\
                 💡 Hint: Set it to the suite you audit (e.g. suite = \"noble\")."
            );
        }
    }

    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|e| {
            anyhow::anyhow!(
                "Invalid config: {}\n\n💡 Hint: Set 'format' to \"text\" or \"json\".",
                e
            )
        })?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
