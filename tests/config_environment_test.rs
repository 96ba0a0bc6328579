// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: CLI settings, analytics overrides and logging configuration from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use trainlog::config::environment::{ENV_DATA_PATH, ENV_OUTPUT};
use trainlog::config::{CliConfig, IntelligenceConfig, OutputFormat};
use trainlog::errors::ErrorCode;
use trainlog::logging::{LogFormat, LoggingConfig};

fn clear_env() {
    for key in [
        ENV_DATA_PATH,
        ENV_OUTPUT,
        "TRAINLOG_BODYWEIGHT_LBS",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "RUST_LOG",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_cli_config_defaults() {
    clear_env();
    let config = CliConfig::from_env().unwrap();
    assert_eq!(config, CliConfig::default());
    assert_eq!(config.output, OutputFormat::Text);
    assert!(config.require_data_path().is_err());
}

#[test]
#[serial]
fn test_cli_config_from_env() {
    clear_env();
    env::set_var(ENV_DATA_PATH, "/data/training.json");
    env::set_var(ENV_OUTPUT, "Json");
    let config = CliConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.data_path, Some(PathBuf::from("/data/training.json")));
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
#[serial]
fn test_cli_config_rejects_unknown_output() {
    clear_env();
    env::set_var(ENV_OUTPUT, "xml");
    let error = CliConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.exit_code(), 78);
}

#[test]
#[serial]
fn test_blank_data_path_is_unset() {
    clear_env();
    env::set_var(ENV_DATA_PATH, "  ");
    let config = CliConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.data_path, None);
}

#[test]
#[serial]
fn test_intelligence_override_from_env() {
    clear_env();
    env::set_var("TRAINLOG_BODYWEIGHT_LBS", "160");
    let config = IntelligenceConfig::load().unwrap();
    clear_env();
    assert!((config.tonnage.bodyweight_lbs - 160.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.level, "warn");
    assert_eq!(config.verbose(true).level, "debug");
}
