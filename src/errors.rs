// ABOUTME: Application error type for the CLI and configuration layers
// ABOUTME: Error codes with stable names, exit codes and conversions from library errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling
//!
//! Ingestion never fails as a whole: rejected points become strings in
//! `ParseOutcome::errors`. `AppError` covers everything around it: reading
//! the log file, decoding the top-level JSON document, configuration and
//! analytics failures. Each error carries an `ErrorCode` whose serialized
//! name is stable for scripts consuming `--output json`.

use std::error::Error as StdError;
use std::{fmt, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trainlog_intelligence::{ConfigError, MetricError};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input document or argument is unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Configuration (6000-6999)
    /// Environment configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    Internal = 9000,
    /// File system failure
    #[serde(rename = "IO_ERROR")]
    Io = 9002,
    /// JSON encoding or decoding failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    Serialization = 9003,
}

impl ErrorCode {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::Serialization => 65,
            Self::ConfigInvalid => 78,
            Self::Io => 74,
            Self::Internal => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::Internal => "An internal error occurred",
            Self::Io => "File operation failed",
            Self::Serialization => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error document for `--output json`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an `ErrorResponse`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::Io, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::Serialization, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<MetricError> for AppError {
    fn from(error: MetricError) -> Self {
        Self::new(ErrorCode::Internal, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::Io.exit_code(), 74);
    }

    #[test]
    fn test_from_io_error_keeps_source() {
        let error = AppError::from(io::Error::new(io::ErrorKind::NotFound, "log.json"));
        assert_eq!(error.code, ErrorCode::Io);
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "File operation failed: log.json");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::from(ConfigError::Parse("Invalid TRAINLOG_OUTPUT".to_owned()));
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();
        assert!(json.contains("CONFIG_INVALID"));
        assert!(json.contains("TRAINLOG_OUTPUT"));
    }
}
