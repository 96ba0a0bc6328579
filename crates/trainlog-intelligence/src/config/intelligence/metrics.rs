// ABOUTME: Metric constants for tonnage, fatigue and pace calculations
// ABOUTME: Bodyweight bonus ratios, per-region fatigue weights and the stride pace threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Configuration
//!
//! Constants consumed by the analytics engine. Defaults reproduce the values
//! the training log has always been scored with; every field can be replaced
//! through environment overrides on `IntelligenceConfig`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trainlog_core::models::{BodyRegion, Exercise};

/// Default athlete bodyweight used for synthetic bodyweight loads
pub const DEFAULT_BODYWEIGHT_LBS: f64 = 125.0;

/// Default fraction of bodyweight counted per second of an isometric hold
pub const DEFAULT_HELD_DURATION_RATIO: f64 = 0.02;

/// Default pace at or under which an interval counts as a stride
pub const DEFAULT_STRIDE_THRESHOLD_S_PER_100M: f64 = 15.0;

/// Fatigue weight applied to regions missing from the weight table
pub const DEFAULT_REGION_WEIGHT: f64 = 1.0;

/// Tonnage calculation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TonnageConfig {
    /// Athlete bodyweight in pounds
    pub bodyweight_lbs: f64,
    /// Fraction of bodyweight per held second for isometric holds
    pub held_duration_ratio: f64,
    /// Fraction of bodyweight added to the load of bodyweight-assisted movements
    pub bonus_ratios: BTreeMap<Exercise, f64>,
}

impl TonnageConfig {
    /// Bonus ratio for `exercise`, zero when it carries no bodyweight bonus
    #[must_use]
    pub fn bonus_ratio(&self, exercise: Exercise) -> f64 {
        self.bonus_ratios.get(&exercise).copied().unwrap_or(0.0)
    }
}

impl Default for TonnageConfig {
    fn default() -> Self {
        let bonus_ratios = [
            (Exercise::BulgarianSplitSquat, 0.7),
            (Exercise::Crunch, 0.1),
            (Exercise::DeadBugs, 0.1),
            (Exercise::FourtyFiveDegreeBackExtension, 0.3),
            (Exercise::LemonSqueezers, 0.2),
            (Exercise::OneLegBuck, 0.4),
            (Exercise::Plank, 0.02),
            (Exercise::Pullup, 1.0),
            (Exercise::Pushup, 0.7),
            (Exercise::RushNTwist, 0.1),
            (Exercise::SingleLegCalfRaise, 0.8),
            (Exercise::SingleLegStairCalfRaise, 0.8),
            (Exercise::Situp, 0.15),
            (Exercise::SpeedSkaterJumps, 0.05),
            (Exercise::SupineKneeDrive, 0.1),
        ]
        .into_iter()
        .collect();

        Self {
            bodyweight_lbs: DEFAULT_BODYWEIGHT_LBS,
            held_duration_ratio: DEFAULT_HELD_DURATION_RATIO,
            bonus_ratios,
        }
    }
}

/// Fatigue scoring settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Multiplier applied to each region's peak pain severity
    pub region_weights: BTreeMap<BodyRegion, f64>,
}

impl FatigueConfig {
    /// Weight for `region`
    #[must_use]
    pub fn weight(&self, region: BodyRegion) -> f64 {
        self.region_weights
            .get(&region)
            .copied()
            .unwrap_or(DEFAULT_REGION_WEIGHT)
    }
}

impl Default for FatigueConfig {
    fn default() -> Self {
        let region_weights = [
            (BodyRegion::Ankle, 1.0),
            (BodyRegion::Arm, 0.5),
            (BodyRegion::Back, 1.0),
            (BodyRegion::Chest, 0.5),
            (BodyRegion::Core, 1.0),
            (BodyRegion::Foot, 1.0),
            (BodyRegion::Hamstring, 3.0),
            (BodyRegion::Hip, 2.0),
            (BodyRegion::Knee, 3.0),
            (BodyRegion::LowerLeg, 2.0),
            (BodyRegion::Neck, DEFAULT_REGION_WEIGHT),
            (BodyRegion::Quad, 3.0),
            (BodyRegion::Shoulder, 0.5),
        ]
        .into_iter()
        .collect();

        Self { region_weights }
    }
}

/// Pace classification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Interval pace (seconds per 100 m) at or under which it counts as a stride
    pub stride_threshold_s_per_100m: f64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            stride_threshold_s_per_100m: DEFAULT_STRIDE_THRESHOLD_S_PER_100M,
        }
    }
}
