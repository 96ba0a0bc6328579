// ABOUTME: Per-kind payload parsers registered under their (type, version) key
// ABOUTME: Runs, lifts, sleep, pain logs, and the smaller kayak/row/bike/note schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every parser has the same shape, `fn(NaiveDateTime, &Value) -> ParseResult<TrainingData>`,
//! so the registry can hold them in one table. Parsers only see the `data`
//! payload; the envelope has already been decoded.

/// Lift v1/v2 and the natural-language rep grammar
pub mod lift;
/// Kayak, row, bike and note payloads
pub mod other;
/// Pain log v1/v2
pub mod pain;
/// Run v1/v2 and interval workouts
pub mod run;
/// Sleep v1/v2
pub mod sleep;

use serde_json::Value;

use crate::errors::ParseResult;
use crate::fields::{self, Object};
use crate::models::units::{frequency, Frequency, Quantity};

/// Optional `average_heartrate` field in beats per minute
pub(crate) fn average_heartrate(obj: &Object) -> ParseResult<Option<Quantity<Frequency>>> {
    Ok(fields::optional_number(obj, "average_heartrate")?
        .map(|bpm| frequency::BEATS_PER_MINUTE.of(bpm)))
}

/// Payload as an object, reporting the field as `data`
pub(crate) fn payload(data: &Value) -> ParseResult<&Object> {
    fields::as_object(data, "data")
}
