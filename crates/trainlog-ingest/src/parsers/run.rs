// ABOUTME: Run payload parsers for schema versions 1 and 2
// ABOUTME: Distances in meters, times in seconds, optional weather, shoe and interval workout data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde_json::Value;

use super::{average_heartrate, payload};
use crate::errors::{ParseError, ParseResult};
use crate::fields::{self, render, Object};
use crate::models::units::{length, time, AnyQuantity, Length, Quantity, Time};
use crate::models::{Interval, RunData, RunningWorkout, TrainingData};
use crate::units::parse_unit;

/// Run v1: `{title, notes?, distance, duration}`
///
/// # Errors
///
/// Fails when `title`, `distance` or `duration` is missing or malformed.
pub fn parse_run_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    Ok(TrainingData::Run(RunData {
        date,
        title: fields::required_str(obj, "title")?,
        notes: fields::optional_str(obj, "notes")?.unwrap_or_default(),
        distance: length::METERS.of(fields::required_number(obj, "distance")?),
        moving_time: time::SECONDS.of(fields::required_number(obj, "duration")?),
        elapsed_time: None,
        temperature_celsius: None,
        feels_like_celsius: None,
        description: None,
        private_note: None,
        shoe: None,
        average_heartrate: None,
        workout: None,
    }))
}

/// Run v2: the activity export schema
///
/// `{title, distance, moving_time, elapsed_time?, temperature?, feels_like?,
/// description?, private_note?, shoe?, average_heartrate?, workout?}`.
/// Blank temperatures are treated as absent.
///
/// # Errors
///
/// Fails when `title`, `distance` or `moving_time` is missing or any present
/// field is malformed.
pub fn parse_run_v2(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    let workout = match obj.get("workout") {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_workout(value)?),
    };
    Ok(TrainingData::Run(RunData {
        date,
        title: fields::required_str(obj, "title")?,
        notes: String::new(),
        distance: length::METERS.of(fields::required_number(obj, "distance")?),
        moving_time: time::SECONDS.of(fields::required_number(obj, "moving_time")?),
        elapsed_time: fields::optional_number(obj, "elapsed_time")?.map(|s| time::SECONDS.of(s)),
        temperature_celsius: fields::optional_signed_number(obj, "temperature")?,
        feels_like_celsius: fields::optional_signed_number(obj, "feels_like")?,
        description: fields::optional_str(obj, "description")?,
        private_note: fields::optional_str(obj, "private_note")?,
        shoe: fields::optional_str(obj, "shoe")?,
        average_heartrate: average_heartrate(obj)?,
        workout,
    }))
}

/// `{intervals: [{distance?, duration?}]}`, or the bare interval array
fn parse_workout(value: &Value) -> ParseResult<RunningWorkout> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(obj) => fields::required_array(obj, "intervals")?,
        other => {
            return Err(ParseError::malformed(
                "workout",
                render(other),
                "expected an object or array",
            ))
        }
    };
    let intervals = items
        .iter()
        .map(|item| parse_interval(fields::as_object(item, "intervals")?))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(RunningWorkout { intervals })
}

fn parse_interval(obj: &Object) -> ParseResult<Interval> {
    Ok(Interval {
        distance: obj
            .get("distance")
            .map(interval_length)
            .transpose()?
            .flatten(),
        duration: obj
            .get("duration")
            .map(interval_time)
            .transpose()?
            .flatten(),
    })
}

/// Bare numbers are meters; strings go through unit parsing and must be lengths
fn interval_length(value: &Value) -> ParseResult<Option<Quantity<Length>>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => match parse_unit(s)? {
            AnyQuantity::Length(q) => Ok(Some(q)),
            // A unitless string defaults to pounds, read it as meters instead
            AnyQuantity::Mass(_) if !s.chars().any(char::is_alphabetic) => {
                fields::number(value, "distance").map(|m| Some(length::METERS.of(m)))
            }
            other => Err(ParseError::malformed(
                "distance",
                s.as_str(),
                format!("expected a length, got {}", other.dimension_name()),
            )),
        },
        _ => fields::number(value, "distance").map(|m| Some(length::METERS.of(m))),
    }
}

/// Bare numbers are seconds; strings go through unit parsing and must be times
fn interval_time(value: &Value) -> ParseResult<Option<Quantity<Time>>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => match parse_unit(s)? {
            AnyQuantity::Time(q) => Ok(Some(q)),
            AnyQuantity::Mass(_) if !s.chars().any(char::is_alphabetic) => {
                fields::number(value, "duration").map(|sec| Some(time::SECONDS.of(sec)))
            }
            other => Err(ParseError::malformed(
                "duration",
                s.as_str(),
                format!("expected a time, got {}", other.dimension_name()),
            )),
        },
        _ => fields::number(value, "duration").map(|sec| Some(time::SECONDS.of(sec))),
    }
}
