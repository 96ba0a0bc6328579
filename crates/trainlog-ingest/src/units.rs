// ABOUTME: Parses unit-suffixed quantities such as "8.5kg", "15meters" or "(24lbs|15meters)"
// ABOUTME: Bare numbers and unknown suffixes default to pounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::errors::{ParseError, ParseResult};
use crate::fields::{self, render};
use crate::models::units::{length, mass, time, AnyQuantity};

/// Stored as Option so a pattern compilation failure surfaces as a parse error
static UNIT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 8kg, 8.5 kg, 0., 15meters
    Regex::new(r"^\s*([\d.]+)\s*([a-zA-Z]*)\s*$").ok()
});

/// Parse a single `<number><optional space><suffix>` term
///
/// | suffix | quantity |
/// |---|---|
/// | `lbs`, `lb`, none, unknown | pounds |
/// | `kg`, `kgs` | kilograms |
/// | `s`, `sec`, `secs` | seconds |
/// | `min`, `mins` | minutes |
/// | `m`, `meters` | meters |
/// | `km` | kilometers |
///
/// # Errors
///
/// Returns `MalformedField` when the text is not a number followed by letters,
/// or when the number itself does not parse (e.g. `"1.2.3"`).
pub fn parse_unit(input: &str) -> ParseResult<AnyQuantity> {
    let captures = UNIT_PATTERN
        .as_ref()
        .and_then(|re| re.captures(input))
        .ok_or_else(|| ParseError::malformed("unit", input, "expected '<number><unit>'"))?;
    let number = captures.get(1).map_or("", |m| m.as_str());
    let suffix = captures.get(2).map_or("", |m| m.as_str());
    let amount = number
        .parse::<f64>()
        .map_err(|e| ParseError::malformed("unit", input, e.to_string()))?;

    Ok(match suffix.to_lowercase().as_str() {
        "kg" | "kgs" => AnyQuantity::Mass(mass::KILOGRAMS.of(amount)),
        "s" | "sec" | "secs" => AnyQuantity::Time(time::SECONDS.of(amount)),
        "min" | "mins" => AnyQuantity::Time(time::MINUTES.of(amount)),
        "m" | "meters" => AnyQuantity::Length(length::METERS.of(amount)),
        "km" => AnyQuantity::Length(length::KILOMETERS.of(amount)),
        _ => AnyQuantity::Mass(mass::POUNDS.of(amount)),
    })
}

/// Parse a possibly multi-unit term
///
/// `"(24lbs|15meters)"` yields one quantity per `|`-separated sub-term; any
/// other input yields the single result of [`parse_unit`].
///
/// # Errors
///
/// Propagates the first sub-term failure.
pub fn parse_units(input: &str) -> ParseResult<Vec<AnyQuantity>> {
    let trimmed = input.trim();
    match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => inner.split('|').map(parse_unit).collect(),
        None => parse_unit(trimmed).map(|q| vec![q]),
    }
}

/// Parse a JSON weight-like value: numbers are pounds, strings go through [`parse_units`]
///
/// # Errors
///
/// Returns `MalformedField` for other JSON types or unparseable strings.
pub fn parse_units_value(value: &Value, field: &str) -> ParseResult<Vec<AnyQuantity>> {
    match value {
        Value::Null => Ok(vec![AnyQuantity::Mass(mass::POUNDS.of(0.0))]),
        Value::Number(_) => {
            fields::number(value, field).map(|n| vec![AnyQuantity::Mass(mass::POUNDS.of(n))])
        }
        Value::String(s) => parse_units(s),
        other => Err(ParseError::malformed(
            field,
            render(other),
            "expected a number or unit string",
        )),
    }
}
