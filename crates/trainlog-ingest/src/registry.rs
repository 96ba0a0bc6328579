// ABOUTME: Raw point envelope and the static (type, version) -> parser registry
// ABOUTME: Looks up the parser for one point and renders every failure as an error string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ParseError, ParseResult};
use crate::fields::{self, render};
use crate::models::TrainingData;
use crate::parsers::{lift, other, pain, run, sleep};

/// Parser for one `(type, version)` payload schema
pub type ParserFn = fn(NaiveDateTime, &Value) -> ParseResult<TrainingData>;

/// Schema version as written in the log (`2` or `"2"`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaVersion {
    /// Integer version
    Number(u64),
    /// Version written as text
    Text(String),
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// One raw training-log point: `{version, type, date, data}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    /// Payload schema version
    pub version: SchemaVersion,
    /// Activity type tag (`run`, `lift`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Timestamp, any format accepted by `fields::parse_date`
    pub date: String,
    /// Kind-specific payload
    #[serde(default)]
    pub data: Value,
}

impl RawPoint {
    /// Decode the envelope of a raw point
    ///
    /// # Errors
    ///
    /// Returns `MalformedField` when the point is not an object or a field has
    /// the wrong type, and `MissingField` when `version`, `type` or `date` is absent.
    pub fn from_value(value: &Value) -> ParseResult<Self> {
        let obj = fields::as_object(value, "point")?;
        for field in ["version", "type", "date"] {
            if matches!(obj.get(field), None | Some(Value::Null)) {
                return Err(ParseError::missing_field(field));
            }
        }
        Self::deserialize(value)
            .map_err(|e| ParseError::malformed("point", render(value), e.to_string()))
    }

    /// Registry key, e.g. `run2`
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{}", self.kind, self.version)
    }
}

static REGISTRY: LazyLock<HashMap<&'static str, ParserFn>> = LazyLock::new(|| {
    let entries: [(&'static str, ParserFn); 13] = [
        ("run1", run::parse_run_v1),
        ("run2", run::parse_run_v2),
        ("lift1", lift::parse_lift_v1),
        ("lift2", lift::parse_lift_v2),
        ("sleep1", sleep::parse_sleep_v1),
        ("sleep2", sleep::parse_sleep_v2),
        ("pain1", pain::parse_pain_v1),
        ("pain2", pain::parse_pain_v2),
        // Legacy name for pain logs
        ("injury1", pain::parse_pain_v1),
        ("kayak1", other::parse_kayak_v1),
        ("row1", other::parse_row_v1),
        ("bike1", other::parse_bike_v1),
        ("note1", other::parse_note_v1),
    ];
    entries.into_iter().collect()
});

/// Every registered `type+version` key, sorted
#[must_use]
pub fn registered_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = REGISTRY.keys().copied().collect();
    kinds.sort_unstable();
    kinds
}

/// Parse one raw point into a typed record
///
/// Never panics and never propagates: an unregistered schema yields
/// `"No processor for <type> version <version>"`, and any parser failure
/// yields `"Failed to parse <type> version <version>: <cause>"`.
///
/// # Errors
///
/// Returns the rendered error string for any failure.
pub fn parse_point(value: &Value) -> Result<TrainingData, String> {
    let point = RawPoint::from_value(value).map_err(|e| format!("Invalid raw point: {e}"))?;
    let Some(parser) = REGISTRY.get(point.key().as_str()) else {
        let version = point.version.to_string();
        return Err(ParseError::unsupported_schema(point.kind.as_str(), version).to_string());
    };
    fields::parse_date(&point.date)
        .and_then(|date| parser(date, &point.data))
        .map_err(|e| format!("Failed to parse {} version {}: {e}", point.kind, point.version))
}
