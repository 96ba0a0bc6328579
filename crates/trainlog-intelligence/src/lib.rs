// ABOUTME: Training analytics over typed training-log records
// ABOUTME: Week partitioning, metrics, injury history, period splitting and analytics configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Intelligence
//!
//! Pure analytics over the records produced by `trainlog-ingest`. A
//! `TrainingDataSet` sorts and partitions records once; `Analysis` scores a
//! data set (or any of its weeks) with the constants in `IntelligenceConfig`.
//!
//! ```rust
//! use trainlog_intelligence::{Analysis, IntelligenceConfig, Metric, TrainingDataSet};
//!
//! let dataset = TrainingDataSet::new(Vec::new());
//! let config = IntelligenceConfig::default();
//! let analysis = Analysis::with_config(&dataset, &config);
//! assert_eq!(analysis.get_metric(Metric::Mileage).unwrap_or_default(), 0.0);
//! ```

/// Analysis facade and metric selection
pub mod analysis;
/// Analytics constants and their environment overrides
pub mod config;
/// Date-sorted, week-partitioned record sets
pub mod dataset;
/// Per-location pain timelines
pub mod injury;
/// Pure metric functions
pub mod metrics;
/// Calendar-aligned period splitting
pub mod periods;
/// Week and day helpers
pub mod time;

pub use analysis::{Analysis, Metric};
pub use config::{ConfigError, IntelligenceConfig};
pub use dataset::TrainingDataSet;
pub use injury::{injury_history, InjuryHistory, PainSnapshot};
pub use metrics::MetricError;
pub use periods::{period_label, split_by_period, GroupByDuration, PeriodData};
