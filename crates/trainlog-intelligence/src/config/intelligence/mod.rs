// ABOUTME: Analytics configuration container with validation and environment overrides
// ABOUTME: Process-wide singleton holding tonnage, fatigue and pace constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Every constant the analytics engine scores with lives here. The global
//! instance is loaded once: defaults, then environment overrides, then
//! validation. Invalid overrides are logged and the defaults are used.

/// Configuration error types
pub mod error;
/// Tonnage, fatigue and pace constants
pub mod metrics;

pub use error::ConfigError;
pub use metrics::{
    FatigueConfig, PaceConfig, TonnageConfig, DEFAULT_BODYWEIGHT_LBS, DEFAULT_HELD_DURATION_RATIO,
    DEFAULT_REGION_WEIGHT, DEFAULT_STRIDE_THRESHOLD_S_PER_100M,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Override for `tonnage.bodyweight_lbs`
pub const ENV_BODYWEIGHT_LBS: &str = "TRAINLOG_BODYWEIGHT_LBS";
/// Override for `tonnage.held_duration_ratio`
pub const ENV_HELD_DURATION_RATIO: &str = "TRAINLOG_HELD_DURATION_RATIO";
/// Override for `pace.stride_threshold_s_per_100m`
pub const ENV_STRIDE_THRESHOLD: &str = "TRAINLOG_STRIDE_THRESHOLD_S_PER_100M";

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Lift tonnage scoring
    pub tonnage: TonnageConfig,
    /// Pain-log fatigue scoring
    pub fatigue: FatigueConfig,
    /// Run pace classification
    pub pace: PaceConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first constant outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.tonnage.bodyweight_lbs) {
            return Err(ConfigError::ValueOutOfRange(
                "bodyweight_lbs must be positive",
            ));
        }

        if !(0.0..=1.0).contains(&self.tonnage.held_duration_ratio) {
            return Err(ConfigError::InvalidRange(
                "held_duration_ratio must be between 0 and 1",
            ));
        }

        if self.tonnage.bonus_ratios.values().any(|r| !(0.0..=1.0).contains(r)) {
            return Err(ConfigError::InvalidRange(
                "bonus ratios must be between 0 and 1",
            ));
        }

        if self
            .fatigue
            .region_weights
            .values()
            .any(|w| w.is_nan() || *w < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue region weights must be non-negative",
            ));
        }

        if !is_positive(self.pace.stride_threshold_s_per_100m) {
            return Err(ConfigError::ValueOutOfRange(
                "stride_threshold_s_per_100m must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_BODYWEIGHT_LBS, &mut self.tonnage.bodyweight_lbs)?;
        Self::apply_env_var(
            ENV_HELD_DURATION_RATIO,
            &mut self.tonnage.held_duration_ratio,
        )?;
        Self::apply_env_var(
            ENV_STRIDE_THRESHOLD,
            &mut self.pace.stride_threshold_s_per_100m,
        )?;
        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use trainlog_core::models::{BodyRegion, Exercise};

    fn clear_env() {
        env::remove_var(ENV_BODYWEIGHT_LBS);
        env::remove_var(ENV_HELD_DURATION_RATIO);
        env::remove_var(ENV_STRIDE_THRESHOLD);
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = IntelligenceConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.tonnage.bodyweight_lbs - 125.0).abs() < f64::EPSILON);
        assert!((config.tonnage.bonus_ratio(Exercise::Pullup) - 1.0).abs() < f64::EPSILON);
        assert!(config.tonnage.bonus_ratio(Exercise::Squat).abs() < f64::EPSILON);
        assert!((config.fatigue.weight(BodyRegion::Knee) - 3.0).abs() < f64::EPSILON);
        assert!((config.fatigue.weight(BodyRegion::Neck) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        clear_env();
        env::set_var(ENV_BODYWEIGHT_LBS, "150");
        env::set_var(ENV_STRIDE_THRESHOLD, " 18.5 ");
        let config = IntelligenceConfig::load().unwrap();
        clear_env();
        assert!((config.tonnage.bodyweight_lbs - 150.0).abs() < f64::EPSILON);
        assert!((config.pace.stride_threshold_s_per_100m - 18.5).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_invalid_env_override_is_rejected() {
        clear_env();
        env::set_var(ENV_BODYWEIGHT_LBS, "heavy");
        let parse = IntelligenceConfig::load();
        env::set_var(ENV_BODYWEIGHT_LBS, "-5");
        let range = IntelligenceConfig::load();
        clear_env();
        assert!(matches!(parse, Err(ConfigError::Parse(_))));
        assert!(matches!(range, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_env_override_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        clear_env();
        env::set_var(ENV_STRIDE_THRESHOLD, OsStr::from_bytes(&[b'1', 0x80]));
        let result = IntelligenceConfig::load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::EnvVar(env::VarError::NotUnicode(_)))));
    }

    #[test]
    fn test_held_duration_ratio_range() {
        let mut config = IntelligenceConfig::default();
        config.tonnage.held_duration_ratio = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
