// ABOUTME: Configuration module for the trainlog CLI and analytics settings
// ABOUTME: Environment-driven CLI settings plus the analytics constants from trainlog-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for trainlog
//!
//! - **Environment**: CLI settings from environment variables
//! - **Intelligence**: analytics constants (bodyweight, fatigue weights, stride threshold)

/// Environment-driven CLI configuration
pub mod environment;

pub use environment::{CliConfig, OutputFormat};
pub use trainlog_intelligence::config::{
    ConfigError, FatigueConfig, IntelligenceConfig, PaceConfig, TonnageConfig,
};
