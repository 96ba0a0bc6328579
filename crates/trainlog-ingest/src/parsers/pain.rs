// ABOUTME: Pain log parsers: v1 structured entries and v2 "<location> (<severity>[, flags])" snapshots
// ABOUTME: Expands "both X" locations and rejects logs that mention the same location twice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::slice;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde_json::Value;

use crate::body_location::parse_body_location;
use crate::constants::pain::{MAX_SEVERITY, MIN_SEVERITY};
use crate::errors::{ParseError, ParseResult};
use crate::fields::{self, render, Object};
use crate::models::{PainAtLocationLogData, PainLogData, TrainingData};

/// Stored as Option so a pattern compilation failure surfaces as a parse error
static SNAPSHOT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "left knee (2)", "both feet (3, flash)"
    Regex::new(r"^\s*([^()]*?)\s*\(([^()]*)\)").ok()
});

/// Pain v1 (also registered as `injury1`): `[{pain, description?, location}]`
///
/// # Errors
///
/// Fails on a non-array payload, an out-of-range severity, an unknown
/// location, or a location repeated within the log.
pub fn parse_pain_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let mut pains = Vec::new();
    for entry in entries(data)? {
        let obj = fields::as_object(entry, "data")?;
        let pain = match obj.get("pain") {
            None | Some(Value::Null) => return Err(ParseError::missing_field("pain")),
            Some(raw) => severity(fields::number(raw, "pain")?, &render(raw))?,
        };
        let description = fields::optional_str(obj, "description")?.unwrap_or_default();
        let phrase = fields::required_str(obj, "location")?;
        pains.extend(
            parse_body_location(&phrase)?
                .into_iter()
                .map(|location| PainAtLocationLogData {
                    pain,
                    description: description.clone(),
                    location,
                }),
        );
    }
    pain_log(date, pains)
}

/// Pain v2: `[{description?, snapshots: ["<location> (<severity>[, flags])"]}]`
///
/// A single object is treated as a one-entry list. Flags after the comma
/// inside the parentheses are ignored for the severity.
///
/// # Errors
///
/// Fails on a malformed snapshot string, an out-of-range severity, an
/// unknown location, or a location repeated within the log.
pub fn parse_pain_v2(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let mut pains = Vec::new();
    for entry in entries(data)? {
        let obj: &Object = fields::as_object(entry, "data")?;
        let description = fields::optional_str(obj, "description")?.unwrap_or_default();
        for snapshot in fields::required_array(obj, "snapshots")? {
            let Value::String(text) = snapshot else {
                return Err(ParseError::malformed(
                    "snapshots",
                    render(snapshot),
                    "expected a string",
                ));
            };
            let (phrase, inner) = extract_paren_data(text)?;
            let score = inner.split(',').next().unwrap_or_default().trim();
            let number = score
                .parse::<f64>()
                .map_err(|e| ParseError::malformed("pain", text.as_str(), e.to_string()))?;
            let pain = severity(number, score)?;
            pains.extend(
                parse_body_location(phrase)?
                    .into_iter()
                    .map(|location| PainAtLocationLogData {
                        pain,
                        description: description.clone(),
                        location,
                    }),
            );
        }
    }
    pain_log(date, pains)
}

/// Split `"left knee (2, flash)"` into `("left knee", "2, flash")`
///
/// # Errors
///
/// Returns `MalformedField` when there is no parenthesised group.
pub fn extract_paren_data(text: &str) -> ParseResult<(&str, &str)> {
    SNAPSHOT_PATTERN
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .ok_or_else(|| {
            ParseError::malformed("snapshots", text, "expected '<location> (<severity>)'")
        })
}

fn entries(data: &Value) -> ParseResult<&[Value]> {
    match data {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(slice::from_ref(data)),
        other => Err(ParseError::malformed("data", render(other), "expected an array")),
    }
}

/// Integer severity in `MIN_SEVERITY..=MAX_SEVERITY`
fn severity(score: f64, raw: &str) -> ParseResult<u8> {
    let in_range = score.fract().abs() < f64::EPSILON
        && score >= f64::from(MIN_SEVERITY)
        && score <= f64::from(MAX_SEVERITY);
    if !in_range {
        return Err(ParseError::malformed(
            "pain",
            raw,
            format!("severity must be a whole number from {MIN_SEVERITY} to {MAX_SEVERITY}"),
        ));
    }
    Ok(score as u8)
}

fn pain_log(date: NaiveDateTime, pains: Vec<PainAtLocationLogData>) -> ParseResult<TrainingData> {
    let mut seen = HashSet::new();
    if let Some(duplicate) = pains.iter().find(|p| !seen.insert(p.location)) {
        return Err(ParseError::duplicate_pain_location(
            duplicate.location.to_string(),
        ));
    }
    Ok(TrainingData::Pain(PainLogData { date, pains }))
}
