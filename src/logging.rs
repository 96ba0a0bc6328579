// ABOUTME: Logging configuration and structured logging setup for the trainlog CLI
// ABOUTME: Configures log levels, formatters and output destinations from the environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.

use std::env;
use std::io;

use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{AppError, AppResult};

/// Service name attached to startup logs
pub const SERVICE_NAME: &str = "trainlog";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log collectors
    Json,
    /// Full human-readable format
    Pretty,
    /// Single-line human-readable format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised is `Compact`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and `LOG_INCLUDE_THREAD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format: env::var("LOG_FORMAT")
                .map_or(LogFormat::Compact, |v| LogFormat::from_str_or_default(&v)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Raise the level to `debug` (the CLI's `--verbose`)
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            "debug".clone_into(&mut self.level);
        }
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()));
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        info!(
            service.name = SERVICE_NAME,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default(" Pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose(true);
        assert_eq!(config.level, "debug");
        assert_eq!(LoggingConfig::default().verbose(false).level, "warn");
    }
}
