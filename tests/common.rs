// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and temporary training-log documents
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `trainlog`

use std::env;
use std::io::Write;
use std::sync::Once;

use serde_json::{json, Value};
use tempfile::{Builder, NamedTempFile};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Write `contents` to a temporary `.json` file
pub fn write_log(contents: &str) -> NamedTempFile {
    init_test_logging();
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Two weeks of mixed training with one rejected point and one duplicate sleep
pub fn sample_points() -> Vec<Value> {
    vec![
        json!({"version": 1, "type": "run", "date": "2024-12-27T07:00:00",
               "data": {"title": "Easy", "distance": 11002, "duration": 3600}}),
        json!({"version": 2, "type": "lift", "date": "2024-12-28T17:00:00",
               "data": {"duration": 30, "exercises": ["squat: 5x100lbs"]}}),
        json!({"version": 1, "type": "sleep", "date": "2024-12-29T06:00:00", "data": {"duration": 480}}),
        json!({"version": 1, "type": "sleep", "date": "2024-12-29T22:00:00", "data": {"duration": 30}}),
        json!({"version": 2, "type": "pain", "date": "2024-12-30",
               "data": {"snapshots": ["left knee (2)"]}}),
        json!({"version": 2, "type": "run", "date": "2025-01-04T08:00:00",
               "data": {"title": "Long", "distance": 16093.44, "moving_time": 5400,
                        "elapsed_time": 5600, "temperature": "", "feels_like": ""}}),
        json!({"version": 1, "type": "swim", "date": "2025-01-05", "data": {}}),
    ]
}

/// `sample_points` written to a temporary file
pub fn sample_log() -> NamedTempFile {
    write_log(&Value::Array(sample_points()).to_string())
}
