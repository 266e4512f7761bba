//! Configuration management
//!
//! An optional TOML file supplies translation defaults so they do not have
//! to be repeated on every invocation:
//!
//! ```toml
//! [translation]
//! folder = "Production Alerts"
//! metric_format = "push_metric"
//! no_data_state = "NoData"
//!
//! [output]
//! format = "yaml"
//! ```
//!
//! Every section and key is optional.

use crate::error::ConfigError;
use crate::output::OutputFormat;
use crate::translator::{MetricFormat, TranslationOptions};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translation: TranslationConfig,
    pub output: OutputConfig,
}

/// `[translation]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub folder: Option<String>,
    pub metric_format: MetricFormat,
    pub no_data_state: Option<String>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::TomlError` if it is not valid TOML for this schema, and
    /// `ConfigError::ValidationError` if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TomlError` or `ConfigError::ValidationError`.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the schema alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(folder) = &self.translation.folder {
            if folder.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "translation.folder must not be blank when set".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Translation options described by this configuration
    pub fn translation_options(&self) -> TranslationOptions {
        TranslationOptions {
            folder: self.translation.folder.clone(),
            no_data_state: self.translation.no_data_state.clone(),
            metric_format: self.translation.metric_format,
        }
    }
}
