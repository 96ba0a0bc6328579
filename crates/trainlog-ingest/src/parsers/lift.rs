// ABOUTME: Lift payload parsers and the natural-language rep grammar ("bicep curl: 3x8x40lbs, 12x50lbs")
// ABOUTME: Structured per-exercise objects and free-text lines can be mixed in one v2 payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! ## Rep grammar
//!
//! A line is `<exercise>: <rep-spec>[, <rep-spec>]*`. Each rep-spec is split
//! on `x`, and its arity decides what it means:
//!
//! | rep-spec | meaning |
//! |---|---|
//! | `20` | 20 reps, no external load |
//! | `8x6kg` | 8 reps at 6 kg |
//! | `3x8x40lbs` | 3 sets of 8 reps at 40 lbs |
//! | `2x(24lbs\|15meters)` | 2 reps carrying 24 lbs over 15 m |
//!
//! Empty rep-specs are skipped, so trailing commas are harmless.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use super::payload;
use crate::constants::lift::MAX_SETS;
use crate::errors::{ParseError, ParseResult};
use crate::fields::{self, render, Object};
use crate::models::units::{mass, time, AnyQuantity};
use crate::models::{Exercise, LiftData, RepData, TrainingData};
use crate::units::{parse_units, parse_units_value};

/// Lift v1: `{title?, notes?, duration (min), exercises: [{exercise, reps, weight}]}`
///
/// # Errors
///
/// Fails when `duration` or `exercises` is missing, or any exercise entry fails.
pub fn parse_lift_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    let duration = fields::required_number(obj, "duration")?;
    let reps = fields::required_array(obj, "exercises")?
        .iter()
        .map(|entry| parse_structured(fields::as_object(entry, "exercises")?))
        .collect::<ParseResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();
    lift(date, obj, duration, reps)
}

/// Lift v2: like v1, but `duration` defaults to 0 and each exercise entry is
/// either a structured object or a rep-grammar line
///
/// # Errors
///
/// Fails when `exercises` is missing or any entry fails to parse.
pub fn parse_lift_v2(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    let duration = fields::optional_number(obj, "duration")?.unwrap_or(0.0);
    let mut reps = Vec::new();
    for entry in fields::required_array(obj, "exercises")? {
        match entry {
            Value::String(line) => reps.extend(natural_reps_parse(line)?),
            Value::Object(structured) => reps.extend(parse_structured(structured)?),
            other => {
                return Err(ParseError::malformed(
                    "exercises",
                    render(other),
                    "expected a string or an object",
                ))
            }
        }
    }
    lift(date, obj, duration, reps)
}

fn lift(
    date: NaiveDateTime,
    obj: &Object,
    duration_minutes: f64,
    reps: Vec<RepData>,
) -> ParseResult<TrainingData> {
    Ok(TrainingData::Lift(LiftData {
        date,
        title: fields::optional_str(obj, "title")?.unwrap_or_else(|| "Lift".to_owned()),
        notes: fields::optional_str(obj, "notes")?,
        duration: time::MINUTES.of(duration_minutes),
        reps,
    }))
}

/// Parse one rep-grammar line into its sets
///
/// # Errors
///
/// Returns `MalformedField` when the line has no `:` or a rep-spec is not
/// well-formed, and `UnknownExercise` when the name does not resolve.
pub fn natural_reps_parse(line: &str) -> ParseResult<Vec<RepData>> {
    let (name, specs) = line.split_once(':').ok_or_else(|| {
        ParseError::malformed("exercises", line, "expected '<exercise>: <sets>'")
    })?;
    let exercise = resolve_exercise(name)?;

    let mut reps = Vec::new();
    for spec in specs.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let tokens: Vec<&str> = spec.split(['x', 'X']).map(str::trim).collect();
        match tokens.as_slice() {
            [count] => reps.push(rep(exercise, parse_count(count)?, Vec::new())),
            [count, units] => reps.push(rep(exercise, parse_count(count)?, parse_units(units)?)),
            [sets, count, units] => {
                let template = rep(exercise, parse_count(count)?, parse_units(units)?);
                let sets = parse_count(sets)?;
                if sets > MAX_SETS {
                    return Err(ParseError::malformed(
                        "exercises",
                        line,
                        format!("at most {MAX_SETS} sets per rep-spec"),
                    ));
                }
                reps.extend((0..sets).map(|_| template.clone()));
            }
            _ => {
                return Err(ParseError::malformed(
                    "exercises",
                    spec,
                    "expected 'reps', 'reps x weight' or 'sets x reps x weight'",
                ))
            }
        }
    }
    debug!(exercise = %exercise, sets = reps.len(), "Parsed rep line");
    Ok(reps)
}

/// `{exercise, reps: n | [n], weight?: w | [w]}`; array positions pair up
fn parse_structured(obj: &Object) -> ParseResult<Vec<RepData>> {
    let exercise = resolve_exercise(&fields::required_str(obj, "exercise")?)?;
    let weight = obj.get("weight").unwrap_or(&Value::Null);

    match obj.get("reps") {
        Some(Value::Array(counts)) => counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let units = match weight {
                    Value::Array(weights) => weights.get(i).ok_or_else(|| {
                        ParseError::malformed(
                            "weight",
                            render(weight),
                            format!("no weight for set {}", i + 1),
                        )
                    })?,
                    scalar => scalar,
                };
                Ok(rep(
                    exercise,
                    count_value(count)?,
                    parse_units_value(units, "weight")?,
                ))
            })
            .collect(),
        Some(count) => {
            if weight.is_array() {
                return Err(ParseError::malformed(
                    "weight",
                    render(weight),
                    "a weight list needs a reps list",
                ));
            }
            Ok(vec![rep(
                exercise,
                count_value(count)?,
                parse_units_value(weight, "weight")?,
            )])
        }
        None => Err(ParseError::missing_field("reps")),
    }
}

fn resolve_exercise(name: &str) -> ParseResult<Exercise> {
    Exercise::from_name(name).ok_or_else(|| ParseError::unknown_exercise(name.trim()))
}

fn parse_count(token: &str) -> ParseResult<u32> {
    token
        .parse::<u32>()
        .map_err(|e| ParseError::malformed("reps", token, e.to_string()))
}

fn count_value(value: &Value) -> ParseResult<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ParseError::malformed("reps", n.to_string(), "expected a whole number")),
        Value::String(s) => parse_count(s.trim()),
        other => Err(ParseError::malformed("reps", render(other), "expected a whole number")),
    }
}

/// Sort parsed quantities into the weight/length/time slots; load defaults to 0 lbs
fn rep(exercise: Exercise, reps: u32, quantities: Vec<AnyQuantity>) -> RepData {
    let weight = quantities
        .iter()
        .find_map(AnyQuantity::as_mass)
        .unwrap_or_else(|| mass::POUNDS.of(0.0));
    RepData {
        exercise,
        reps,
        weight,
        length: quantities.iter().find_map(AnyQuantity::as_length),
        time: quantities.iter().find_map(AnyQuantity::as_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::length;

    #[test]
    fn test_basic_line() {
        let parsed = natural_reps_parse("overhead press: 8x6kg, 8x8kg, 8x8kg").unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].exercise, Exercise::OverheadPress);
        assert_eq!(parsed[0].reps, 8);
        assert!((parsed[0].weight.value_in(mass::KILOGRAMS) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_specs_are_dropped() {
        assert_eq!(natural_reps_parse("overhead press: 8x6kg,").unwrap().len(), 1);
        assert!(natural_reps_parse("overhead press: ").unwrap().is_empty());
    }

    #[test]
    fn test_three_token_spec_expands_sets() {
        let parsed = natural_reps_parse("bicep curl: 3x8x40lbs, 12x50lbs").unwrap();
        assert_eq!(parsed.len(), 4);
        for set in &parsed[..3] {
            assert_eq!(set.reps, 8);
            assert!((set.weight.value_in(mass::POUNDS) - 40.0).abs() < 1e-12);
        }
        assert_eq!(parsed[3].reps, 12);
        assert!((parsed[3].weight.value_in(mass::POUNDS) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_count_is_bounded() {
        let at_limit = natural_reps_parse(&format!("squat: {MAX_SETS}x1x10kg")).unwrap();
        assert_eq!(at_limit.len(), MAX_SETS as usize);

        for line in ["squat: 5000000x1x10kg", "squat: 4000000000x1x10kg"] {
            let err = natural_reps_parse(line).unwrap_err();
            assert!(
                matches!(&err, ParseError::MalformedField { field, value, .. } if field == "exercises" && value == line),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_bodyweight_spec_has_zero_load() {
        let parsed = natural_reps_parse("single leg calf raise: 20, 20, 20").unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed.iter().all(|r| r.reps == 20 && r.weight.is_zero()));
    }

    #[test]
    fn test_multi_unit_carry() {
        let parsed = natural_reps_parse("farmer cary: 2x(24lbs|15meters)").unwrap();
        assert_eq!(parsed.len(), 1);
        let carry = &parsed[0];
        assert_eq!(carry.exercise, Exercise::FarmerCarry);
        assert_eq!(carry.reps, 2);
        assert!((carry.weight.value_in(mass::POUNDS) - 24.0).abs() < 1e-12);
        assert!((carry.length.unwrap().value_in(length::METERS) - 15.0).abs() < 1e-12);
        assert!(carry.time.is_none());
    }

    #[test]
    fn test_held_duration() {
        let parsed = natural_reps_parse("plank: 1x(0lbs|60s)").unwrap();
        assert!((parsed[0].time.unwrap().value_in(time::SECONDS) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_exercise() {
        let err = natural_reps_parse("zumba: 3x10").unwrap_err();
        assert_eq!(err.to_string(), "zumba is not a valid exercise");
    }

    #[test]
    fn test_missing_colon() {
        assert!(natural_reps_parse("squat 5x100kg").is_err());
    }

    #[test]
    fn test_bad_rep_count() {
        assert!(natural_reps_parse("squat: fivex100kg").is_err());
        assert!(natural_reps_parse("squat: 1x2x3x4").is_err());
    }

    #[test]
    fn test_structured_arrays_pair_positions() {
        let obj = serde_json::json!({"exercise": "Bench", "reps": [8, 6], "weight": ["8 kg", "10kg"]});
        let parsed = parse_structured(obj.as_object().unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].reps, 6);
        assert!((parsed[1].weight.value_in(mass::KILOGRAMS) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_structured_weight_list_too_short() {
        let obj = serde_json::json!({"exercise": "Bench", "reps": [8, 6], "weight": ["8 kg"]});
        assert!(parse_structured(obj.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_structured_numeric_weight_is_pounds() {
        let obj = serde_json::json!({"exercise": "squat", "reps": "5", "weight": 135});
        let parsed = parse_structured(obj.as_object().unwrap()).unwrap();
        assert!((parsed[0].weight.value_in(mass::POUNDS) - 135.0).abs() < 1e-12);
    }
}
