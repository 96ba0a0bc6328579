// ABOUTME: Sleep payload parsers for schema versions 1 and 2
// ABOUTME: Duration in minutes, v2 adds a 1-5 quality score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde_json::Value;

use super::payload;
use crate::constants::sleep::{MAX_QUALITY, MIN_QUALITY};
use crate::errors::{ParseError, ParseResult};
use crate::fields;
use crate::models::units::time;
use crate::models::{SleepData, TrainingData};

/// Sleep v1: `{duration (min)}`
///
/// # Errors
///
/// Fails when `duration` is missing or not numeric.
pub fn parse_sleep_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    Ok(TrainingData::Sleep(SleepData {
        date,
        duration: time::MINUTES.of(fields::required_number(obj, "duration")?),
        quality: None,
    }))
}

/// Sleep v2: `{duration (min), quality (1-5)}`
///
/// # Errors
///
/// Fails when either field is missing or `quality` is out of range.
pub fn parse_sleep_v2(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    let quality = fields::required_number(obj, "quality")?;
    let valid = quality.fract().abs() < f64::EPSILON
        && quality >= f64::from(MIN_QUALITY)
        && quality <= f64::from(MAX_QUALITY);
    if !valid {
        return Err(ParseError::malformed(
            "quality",
            quality.to_string(),
            format!("quality must be a whole number from {MIN_QUALITY} to {MAX_QUALITY}"),
        ));
    }
    Ok(TrainingData::Sleep(SleepData {
        date,
        duration: time::MINUTES.of(fields::required_number(obj, "duration")?),
        quality: Some(quality as u8),
    }))
}
