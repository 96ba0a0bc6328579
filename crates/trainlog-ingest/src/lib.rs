// ABOUTME: Training-log ingestion: raw JSON points in, typed training records and error strings out
// ABOUTME: Versioned parser registry, unit and rep grammar parsing, body-location resolution, post-processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Ingest
//!
//! Turns a heterogeneous, versioned array of raw training-log points into
//! `TrainingData` records. Each point is parsed in isolation; a failure on one
//! point becomes an error string and never aborts the batch.
//!
//! ```rust
//! use serde_json::json;
//!
//! let points = vec![
//!     json!({"version": 1, "type": "sleep", "date": "2025-02-01T22:30:00", "data": {"duration": 480}}),
//!     json!({"version": 9, "type": "swim", "date": "2025-02-01", "data": {}}),
//! ];
//! let (records, errors) = trainlog_ingest::parse(&points).into_pair();
//! assert_eq!(records.len(), 1);
//! assert_eq!(errors, vec!["No processor for swim version 9".to_owned()]);
//! ```

// Re-export core modules so parsers can keep `use crate::models::*` etc.
pub use trainlog_core::constants;
pub use trainlog_core::errors;
pub use trainlog_core::models;

/// Body-location phrase resolution with side expansion
pub mod body_location;
/// Batch parsing entry points
pub mod dispatch;
/// Lenient JSON field access and date parsing
pub mod fields;
/// Per-kind payload parsers
pub mod parsers;
/// Batch invariants applied after per-record parsing
pub mod postprocess;
/// Raw point envelope and the `(type, version)` parser registry
pub mod registry;
/// Unit-suffixed quantity parsing
pub mod units;

pub use body_location::parse_body_location;
pub use dispatch::{parse, parse_json_str, ParseOutcome};
pub use parsers::lift::natural_reps_parse;
pub use registry::{registered_kinds, RawPoint};
pub use units::{parse_unit, parse_units};
