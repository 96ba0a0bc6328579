// ABOUTME: Benchmark fixtures generating realistic raw training-log points
// ABOUTME: Deterministic mix of runs, lifts, sleep, pain and cross-training entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic raw-point generation for reproducible measurements.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PointBatchSize {
    /// About two weeks of logging
    Small,
    /// About four months of logging
    Medium,
    /// About three years of logging
    Large,
}

impl PointBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 300,
            Self::Large => 3000,
        }
    }
}

fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 2)
        .and_then(|day| day.and_hms_opt(6, 30, 0))
        .unwrap_or_default()
}

/// One raw point; the kind rotates so every parser is exercised
#[allow(clippy::cast_precision_loss)]
fn generate_point(index: usize) -> Value {
    // Roughly three entries per day
    let date = base_date() + Duration::hours((index * 8) as i64);
    let date = date.format("%Y-%m-%dT%H:%M:%S").to_string();
    match index % 6 {
        0 => json!({
            "version": 2, "type": "run", "date": date,
            "data": {
                "title": format!("Run {index}"),
                "distance": 5000.0 + ((index * 251) % 10000) as f64,
                "moving_time": 1500 + (index * 137) % 3600,
                "elapsed_time": 1700 + (index * 137) % 3600,
                "average_heartrate": 130 + (index * 17) % 40,
                "temperature": "", "feels_like": ""
            }
        }),
        1 => json!({
            "version": 2, "type": "lift", "date": date,
            "data": {
                "duration": 40,
                "exercises": [
                    "squat: 5x60kg, 5x70kg, 5x80kg",
                    "bench: 8x40kg, 8x40kg",
                    "plank: 1x(0lbs|60s), 1x(0lbs|45s)",
                    "farmer carry: 2x(24kg|40meters)",
                    {"exercise": "deadlift", "reps": [5, 5], "weight": ["100kg", "100 kg"]}
                ]
            }
        }),
        2 => json!({
            "version": 2, "type": "sleep", "date": date,
            "data": {"duration": 400 + (index % 90), "quality": 1 + index % 5}
        }),
        3 => json!({
            "version": 2, "type": "pain", "date": date,
            "data": {"snapshots": ["both knees (2)", format!("right calf ({})", 1 + index % 4)]}
        }),
        4 => json!({
            "version": 1, "type": "bike", "date": date,
            "data": {"distance": 20000 + index % 5000, "moving_time": 3600, "average_heartrate": 125}
        }),
        _ => json!({
            "version": 1, "type": "note", "date": date,
            "data": {"title": format!("Note {index}"), "content": "Felt fine"}
        }),
    }
}

/// Generate a batch of raw points in chronological order
#[must_use]
pub fn generate_points(size: PointBatchSize) -> Vec<Value> {
    (0..size.count()).map(generate_point).collect()
}
