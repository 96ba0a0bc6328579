// ABOUTME: Lenient accessors for loosely-typed JSON payload fields
// ABOUTME: Numbers-or-numeric-strings, optional text, and raw point date parsing into local time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training logs were written by hand and by several exporters over the
//! years, so the same field can arrive as `42`, `"42"` or `" 42 "`. These
//! helpers accept all of them and report anything else as a malformed field.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

use crate::constants::date_formats::{NAIVE_DATE, NAIVE_DATE_TIME};
use crate::errors::{ParseError, ParseResult};

/// Payload object alias
pub type Object = Map<String, Value>;

/// Borrow `value` as a JSON object
///
/// # Errors
///
/// Returns `MalformedField` when `value` is not an object.
pub fn as_object<'a>(value: &'a Value, field: &str) -> ParseResult<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| ParseError::malformed(field, render(value), "expected an object"))
}

/// Interpret a JSON number or numeric string as a finite `f64`
fn finite_number(value: &Value, field: &str) -> ParseResult<f64> {
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ParseError::malformed(field, n.to_string(), "not representable as f64"))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| ParseError::malformed(field, s.as_str(), e.to_string()))?,
        other => return Err(ParseError::malformed(field, render(other), "expected a number")),
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(ParseError::malformed(field, render(value), "expected a finite number"))
    }
}

/// Interpret a JSON number or numeric string as a non-negative `f64`
///
/// Distances, durations, loads and counts all go through here.
///
/// # Errors
///
/// Returns `MalformedField` for non-numeric strings, other JSON types,
/// `NaN`/infinite values and negative values.
pub fn number(value: &Value, field: &str) -> ParseResult<f64> {
    let number = finite_number(value, field)?;
    if number < 0.0 {
        return Err(ParseError::malformed(field, render(value), "must not be negative"));
    }
    Ok(number)
}

/// Required numeric field
///
/// # Errors
///
/// Returns `MissingField` when absent or null, `MalformedField` when not numeric.
pub fn required_number(obj: &Object, field: &str) -> ParseResult<f64> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ParseError::missing_field(field)),
        Some(value) => number(value, field),
    }
}

/// Optional numeric field; absent, null and blank strings are `None`
///
/// # Errors
///
/// Returns `MalformedField` when present but not numeric.
pub fn optional_number(obj: &Object, field: &str) -> ParseResult<Option<f64>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => number(value, field).map(Some),
    }
}

/// Optional signed numeric field such as a temperature
///
/// # Errors
///
/// Returns `MalformedField` when present but not a finite number.
pub fn optional_signed_number(obj: &Object, field: &str) -> ParseResult<Option<f64>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => finite_number(value, field).map(Some),
    }
}

/// Required text field
///
/// # Errors
///
/// Returns `MissingField` when absent or null, `MalformedField` when not a string.
pub fn required_str(obj: &Object, field: &str) -> ParseResult<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ParseError::missing_field(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::malformed(field, render(other), "expected a string")),
    }
}

/// Optional text field; absent, null and empty strings are `None`
///
/// # Errors
///
/// Returns `MalformedField` when present but not a string.
pub fn optional_str(obj: &Object, field: &str) -> ParseResult<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ParseError::malformed(field, render(other), "expected a string")),
    }
}

/// Required array field
///
/// # Errors
///
/// Returns `MissingField` when absent or null, `MalformedField` when not an array.
pub fn required_array<'a>(obj: &'a Object, field: &str) -> ParseResult<&'a Vec<Value>> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ParseError::missing_field(field)),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ParseError::malformed(field, render(other), "expected an array")),
    }
}

/// Parse a raw point timestamp into local wall-clock time
///
/// RFC 3339 timestamps carry an offset and are converted to the local zone;
/// every other accepted format is already local.
///
/// # Errors
///
/// Returns `MalformedField` when no accepted format matches.
pub fn parse_date(raw: &str) -> ParseResult<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    if let Some(dt) = NAIVE_DATE_TIME
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(dt);
    }
    NAIVE_DATE
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| ParseError::malformed("date", raw, "unrecognized date format"))
}

/// Compact text form of a JSON value for error messages
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
