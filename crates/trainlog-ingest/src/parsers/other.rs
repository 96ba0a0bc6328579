// ABOUTME: Parsers for the smaller activity schemas: kayak, row, bike and journal notes
// ABOUTME: Kayak/row durations in minutes, bike and row moving times in seconds, distances in meters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde_json::Value;

use super::{average_heartrate, payload};
use crate::errors::{ParseError, ParseResult};
use crate::fields;
use crate::models::units::{length, time};
use crate::models::{BikeData, KayakData, NoteData, RowData, TrainingData};

/// Kayak v1: `{duration (min), description?, average_heartrate?}`
///
/// # Errors
///
/// Fails when `duration` is missing or any present field is malformed.
pub fn parse_kayak_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    Ok(TrainingData::Kayak(KayakData {
        date,
        duration: time::MINUTES.of(fields::required_number(obj, "duration")?),
        description: fields::optional_str(obj, "description")?,
        average_heartrate: average_heartrate(obj)?,
    }))
}

/// Row v1: `{duration (min) | moving_time (s), distance? (m), description?, average_heartrate?}`
///
/// # Errors
///
/// Fails when neither `moving_time` nor `duration` is present, or any present
/// field is malformed.
pub fn parse_row_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    let moving_time = match fields::optional_number(obj, "moving_time")? {
        Some(seconds) => time::SECONDS.of(seconds),
        None => fields::optional_number(obj, "duration")?
            .map(|minutes| time::MINUTES.of(minutes))
            .ok_or_else(|| ParseError::missing_field("moving_time"))?,
    };
    Ok(TrainingData::Row(RowData {
        date,
        moving_time,
        distance: fields::optional_number(obj, "distance")?.map(|m| length::METERS.of(m)),
        description: fields::optional_str(obj, "description")?,
        average_heartrate: average_heartrate(obj)?,
    }))
}

/// Bike v1: `{title?, description?, distance (m), moving_time (s), average_heartrate?}`
///
/// # Errors
///
/// Fails when `distance` or `moving_time` is missing or any field is malformed.
pub fn parse_bike_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    Ok(TrainingData::Bike(BikeData {
        date,
        title: fields::optional_str(obj, "title")?.unwrap_or_else(|| "Ride".to_owned()),
        description: fields::optional_str(obj, "description")?,
        distance: length::METERS.of(fields::required_number(obj, "distance")?),
        moving_time: time::SECONDS.of(fields::required_number(obj, "moving_time")?),
        average_heartrate: average_heartrate(obj)?,
    }))
}

/// Note v1: `{title, content, topic?}`
///
/// # Errors
///
/// Fails when `title` or `content` is missing.
pub fn parse_note_v1(date: NaiveDateTime, data: &Value) -> ParseResult<TrainingData> {
    let obj = payload(data)?;
    Ok(TrainingData::Note(NoteData {
        date,
        title: fields::required_str(obj, "title")?,
        content: fields::required_str(obj, "content")?,
        topic: fields::optional_str(obj, "topic")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use chrono::NaiveDate;
    use serde_json::json;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 14)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_kayak() {
        let record = parse_kayak_v1(date(), &json!({"duration": 45, "average_heartrate": 128})).unwrap();
        let TrainingData::Kayak(kayak) = record else {
            panic!("expected a kayak session");
        };
        assert!((kayak.duration.value_in(time::MINUTES) - 45.0).abs() < 1e-12);
        assert!(kayak.average_heartrate.is_some());
    }

    #[test]
    fn test_row_prefers_moving_time() {
        let record = parse_row_v1(date(), &json!({"moving_time": 1200, "duration": 30})).unwrap();
        let TrainingData::Row(row) = record else {
            panic!("expected a row session");
        };
        assert!((row.moving_time.value_in(time::MINUTES) - 20.0).abs() < 1e-12);

        let record = parse_row_v1(date(), &json!({"duration": 30, "distance": 6000})).unwrap();
        let TrainingData::Row(row) = record else {
            panic!("expected a row session");
        };
        assert!((row.moving_time.value_in(time::MINUTES) - 30.0).abs() < 1e-12);
        assert!(row.distance.is_some());

        assert!(parse_row_v1(date(), &json!({"distance": 6000})).is_err());
    }

    #[test]
    fn test_bike_defaults_title() {
        let record = parse_bike_v1(date(), &json!({"distance": 30000, "moving_time": 3600})).unwrap();
        let TrainingData::Bike(bike) = record else {
            panic!("expected a ride");
        };
        assert_eq!(bike.title, "Ride");
    }

    #[test]
    fn test_note() {
        let record = parse_note_v1(
            date(),
            &json!({"title": "Race plan", "content": "Negative split", "topic": "racing"}),
        )
        .unwrap();
        assert_eq!(record.kind(), RecordKind::Note);
        assert!(parse_note_v1(date(), &json!({"title": "Empty"})).is_err());
    }
}
