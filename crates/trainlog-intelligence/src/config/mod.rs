// ABOUTME: Configuration module for trainlog-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics constants (tonnage, fatigue, pace)
pub mod intelligence;

pub use intelligence::{ConfigError, FatigueConfig, IntelligenceConfig, PaceConfig, TonnageConfig};
