//! TOML-based configuration for Vitrine.
//!
//! Supports a config file (vitrine.toml) with environment variable
//! expansion in the dataset path. Every field has a default; a missing
//! file just means an all-default configuration.
//!
//! Example configuration:
//! ```toml
//! [dataset]
//! path = "${DATA_DIR}/all_data.csv"
//!
//! [display]
//! currency_label = "Rp"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unclosed variable reference in '{0}'")]
    UnclosedVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset configuration.
    #[serde(default)]
    pub dataset: DatasetSettings,

    /// Display configuration for the text renderer.
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Parse settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Parse settings from a TOML file, falling back to defaults when the
    /// file does not exist. Other read or parse failures still error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Dataset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Path to the order CSV (supports ${ENV_VAR} expansion).
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: "dataset/all_data.csv".to_string(),
        }
    }
}

impl DatasetSettings {
    /// Get the dataset path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.path)
    }
}

/// Display configuration for the text renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Label prefixed to currency amounts.
    pub currency_label: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_label: "Rp".to_string(),
        }
    }
}

/// Expand `${VAR}` references against the process environment.
///
/// Only the braced form is recognized; a bare `$` passes through.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| SettingsError::UnclosedVar(s.to_string()))?;
        let name = &after[..end];
        let value =
            env::var(name).map_err(|_| SettingsError::MissingEnvVar(name.to_string()))?;
        result.push_str(&value);
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}
