// ABOUTME: Environment configuration for the trainlog CLI
// ABOUTME: Resolves the training-log path and output format from environment variables and flags
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based CLI configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Path to the training-log JSON document
pub const ENV_DATA_PATH: &str = "TRAINLOG_DATA_PATH";
/// Default output format (`text` or `json`)
pub const ENV_OUTPUT: &str = "TRAINLOG_OUTPUT";

/// How command results are rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Text,
    /// Pretty-printed JSON documents
    Json,
}

impl OutputFormat {
    /// Parse `text` or `json`, ignoring case and surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any other value
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Invalid {ENV_OUTPUT} '{other}', expected text or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// CLI settings resolved from the environment, then overridden by flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Training-log document to read
    pub data_path: Option<PathBuf>,
    /// Output rendering
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `TRAINLOG_OUTPUT` holds an unknown format
    pub fn from_env() -> AppResult<Self> {
        let data_path = env::var(ENV_DATA_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let output = env::var(ENV_OUTPUT)
            .map_or_else(|_| Ok(OutputFormat::default()), |value| OutputFormat::parse(&value))?;
        let config = Self { data_path, output };
        debug!(?config, "Loaded CLI configuration from environment");
        Ok(config)
    }

    /// Apply command-line flags on top of the environment settings
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        output: Option<OutputFormat>,
    ) -> Self {
        if data_path.is_some() {
            self.data_path = data_path;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// The training-log path, required by every data command
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when neither the flag nor `TRAINLOG_DATA_PATH` is set
    pub fn require_data_path(&self) -> AppResult<&PathBuf> {
        self.data_path.as_ref().ok_or_else(|| {
            AppError::invalid_input(format!(
                "No training log given: pass --data or set {ENV_DATA_PATH}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(" text ").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_flags_override_environment() {
        let config = CliConfig {
            data_path: Some(PathBuf::from("env.json")),
            output: OutputFormat::Text,
        }
        .with_overrides(None, Some(OutputFormat::Json));
        assert_eq!(config.data_path, Some(PathBuf::from("env.json")));
        assert_eq!(config.output, OutputFormat::Json);

        let config = config.with_overrides(Some(PathBuf::from("flag.json")), None);
        assert_eq!(config.require_data_path().unwrap(), &PathBuf::from("flag.json"));
        assert!(CliConfig::default().require_data_path().is_err());
    }
}
