// ABOUTME: Main library entry point for the trainlog training-log toolkit
// ABOUTME: Re-exports ingestion and analytics and adds file loading, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog
//!
//! Ingests versioned training-log JSON documents (runs, lifts, sleep, pain,
//! kayak, row, bike and note entries) into typed records and computes
//! training analytics over them.
//!
//! ## Crates
//!
//! - `trainlog-core`: record model, exercises, body locations and typed quantities
//! - `trainlog-ingest`: schema-versioned parsing with per-point error isolation
//! - `trainlog-intelligence`: week partitioning, metrics, injuries and periods
//!
//! ## Quick Start
//!
//! ```rust
//! use trainlog::{parse_json_str, Analysis, IntelligenceConfig, Metric, TrainingDataSet};
//!
//! let outcome = parse_json_str(
//!     r#"[{"version": 1, "type": "run", "date": "2024-12-27T07:00:00",
//!          "data": {"title": "Easy", "distance": 11002, "duration": 3600}}]"#,
//! )
//! .unwrap_or_default();
//! let dataset = TrainingDataSet::new(outcome.records);
//! let config = IntelligenceConfig::default();
//! let miles = Analysis::with_config(&dataset, &config)
//!     .get_metric(Metric::Mileage)
//!     .unwrap_or_default();
//! assert!((miles - 6.836).abs() < 1e-3);
//! ```

/// Configuration management
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

pub use trainlog_core::models;
pub use trainlog_core::models::{RecordKind, TrainingData};
pub use trainlog_ingest::{parse, parse_json_str, registered_kinds, ParseOutcome};
pub use trainlog_intelligence::{
    injury_history, period_label, split_by_period, Analysis, GroupByDuration, InjuryHistory,
    IntelligenceConfig, Metric, PeriodData, TrainingDataSet,
};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Read and ingest a training-log document from disk
///
/// Rejected points end up in [`ParseOutcome::errors`]; only an unreadable
/// file or a document that is not JSON fails the whole load.
///
/// # Errors
///
/// Returns an I/O error when the file cannot be read and an invalid-input
/// error when its contents are not valid JSON.
pub fn load_file(path: &Path) -> AppResult<ParseOutcome> {
    debug!(path = %path.display(), "Reading training log");
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::new(ErrorCode::Io, format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let outcome = parse_json_str(&contents).map_err(|e| {
        AppError::invalid_input(format!("{} is not valid JSON: {e}", path.display()))
    })?;
    info!(
        path = %path.display(),
        records = outcome.records.len(),
        errors = outcome.errors.len(),
        "Loaded training log"
    );
    Ok(outcome)
}

/// Ingest a file and build the week-partitioned data set in one step
///
/// # Errors
///
/// Same failure modes as [`load_file`].
pub fn load_dataset(path: &Path) -> AppResult<(TrainingDataSet, Vec<String>)> {
    let (records, errors) = load_file(path)?.into_pair();
    Ok((TrainingDataSet::new(records), errors))
}
