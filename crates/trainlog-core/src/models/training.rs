// ABOUTME: Typed training records produced by ingestion (runs, lifts, sleep, pain logs, etc.)
// ABOUTME: Discriminated TrainingData union with per-kind record structs and rep/interval details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::body_location::BodyLocationWithSide;
use super::exercise::Exercise;
use super::units::{Frequency, Length, Mass, Pace, Quantity, Time};

/// One exercise set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepData {
    /// Exercise performed
    pub exercise: Exercise,
    /// Repetitions in the set
    pub reps: u32,
    /// External load (zero for bodyweight movements)
    pub weight: Quantity<Mass>,
    /// Distance covered, for carries and pushes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Quantity<Length>>,
    /// Duration held, for isometric holds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Quantity<Time>>,
}

/// One repetition of a structured running workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    /// Interval distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Quantity<Length>>,
    /// Interval duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Quantity<Time>>,
}

impl Interval {
    /// Pace over the interval, when both distance and duration are known
    #[must_use]
    pub fn pace(&self) -> Option<Quantity<Pace>> {
        match (self.distance, self.duration) {
            (Some(distance), Some(duration)) if !distance.is_zero() => Some(duration / distance),
            _ => None,
        }
    }
}

/// Interval data attached to a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningWorkout {
    /// Intervals in the order they were run
    pub intervals: Vec<Interval>,
}

impl RunningWorkout {
    /// Compact interval notation, e.g. `"4 x 400 m, 1 x 1600 m"`
    ///
    /// Consecutive intervals of the same distance are grouped; intervals
    /// without a distance are skipped.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut groups: Vec<(String, usize)> = Vec::new();
        for distance in self.intervals.iter().filter_map(|i| i.distance) {
            let label = distance.to_string();
            match groups.last_mut() {
                Some((current, count)) if *current == label => *count += 1,
                _ => groups.push((label, 1)),
            }
        }
        groups
            .iter()
            .map(|(label, count)| format!("{count} x {label}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunData {
    /// When the run started (local time)
    pub date: NaiveDateTime,
    /// Activity title
    pub title: String,
    /// Free-form notes
    pub notes: String,
    /// Distance covered
    pub distance: Quantity<Length>,
    /// Time spent moving
    pub moving_time: Quantity<Time>,
    /// Wall-clock time including stops
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<Quantity<Time>>,
    /// Average temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<f64>,
    /// Apparent temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_celsius: Option<f64>,
    /// Public description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Private note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    /// Shoe worn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe: Option<String>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<Quantity<Frequency>>,
    /// Structured interval data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<RunningWorkout>,
}

impl RunData {
    /// Whole-run average pace, `None` for a zero-distance run
    #[must_use]
    pub fn pace(&self) -> Option<Quantity<Pace>> {
        if self.distance.is_zero() {
            None
        } else {
            Some(self.moving_time / self.distance)
        }
    }
}

/// A strength session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftData {
    /// When the session started (local time)
    pub date: NaiveDateTime,
    /// Session title
    pub title: String,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Session duration
    pub duration: Quantity<Time>,
    /// Every set performed, in log order
    pub reps: Vec<RepData>,
}

/// A night of sleep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepData {
    /// When the sleep was logged (local time)
    pub date: NaiveDateTime,
    /// Time asleep
    pub duration: Quantity<Time>,
    /// Subjective quality 1-5, absent in older logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

/// Pain at one body location on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PainAtLocationLogData {
    /// Severity 1-5
    pub pain: u8,
    /// Free-form description
    pub description: String,
    /// Where it hurts
    pub location: BodyLocationWithSide,
}

/// A daily pain snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PainLogData {
    /// When the snapshot was taken (local time)
    pub date: NaiveDateTime,
    /// At most one entry per body location
    pub pains: Vec<PainAtLocationLogData>,
}

/// A kayak session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KayakData {
    /// When the session started (local time)
    pub date: NaiveDateTime,
    /// Session duration
    pub duration: Quantity<Time>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<Quantity<Frequency>>,
}

/// A rowing session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowData {
    /// When the session started (local time)
    pub date: NaiveDateTime,
    /// Time spent rowing
    pub moving_time: Quantity<Time>,
    /// Distance rowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Quantity<Length>>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<Quantity<Frequency>>,
}

/// A bike ride
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BikeData {
    /// When the ride started (local time)
    pub date: NaiveDateTime,
    /// Activity title
    pub title: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Distance ridden
    pub distance: Quantity<Length>,
    /// Time spent moving
    pub moving_time: Quantity<Time>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<Quantity<Frequency>>,
}

/// A free-form journal note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteData {
    /// When the note was written (local time)
    pub date: NaiveDateTime,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Optional topic tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Discriminant of a `TrainingData` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Run
    Run,
    /// Strength session
    Lift,
    /// Sleep
    Sleep,
    /// Pain snapshot
    Pain,
    /// Kayak session
    Kayak,
    /// Rowing session
    Row,
    /// Bike ride
    Bike,
    /// Journal note
    Note,
}

impl RecordKind {
    /// Type tag as used in raw points
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Lift => "lift",
            Self::Sleep => "sleep",
            Self::Pain => "pain",
            Self::Kayak => "kayak",
            Self::Row => "row",
            Self::Bike => "bike",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed training-log record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TrainingData {
    /// Run
    Run(RunData),
    /// Strength session
    Lift(LiftData),
    /// Sleep
    Sleep(SleepData),
    /// Pain snapshot
    Pain(PainLogData),
    /// Kayak session
    Kayak(KayakData),
    /// Rowing session
    Row(RowData),
    /// Bike ride
    Bike(BikeData),
    /// Journal note
    Note(NoteData),
}

impl TrainingData {
    /// When the activity occurred (local time)
    #[must_use]
    pub const fn date(&self) -> NaiveDateTime {
        match self {
            Self::Run(d) => d.date,
            Self::Lift(d) => d.date,
            Self::Sleep(d) => d.date,
            Self::Pain(d) => d.date,
            Self::Kayak(d) => d.date,
            Self::Row(d) => d.date,
            Self::Bike(d) => d.date,
            Self::Note(d) => d.date,
        }
    }

    /// Record discriminant
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Run(_) => RecordKind::Run,
            Self::Lift(_) => RecordKind::Lift,
            Self::Sleep(_) => RecordKind::Sleep,
            Self::Pain(_) => RecordKind::Pain,
            Self::Kayak(_) => RecordKind::Kayak,
            Self::Row(_) => RecordKind::Row,
            Self::Bike(_) => RecordKind::Bike,
            Self::Note(_) => RecordKind::Note,
        }
    }

    /// The run, if this record is one
    #[must_use]
    pub const fn as_run(&self) -> Option<&RunData> {
        match self {
            Self::Run(d) => Some(d),
            _ => None,
        }
    }

    /// The lift, if this record is one
    #[must_use]
    pub const fn as_lift(&self) -> Option<&LiftData> {
        match self {
            Self::Lift(d) => Some(d),
            _ => None,
        }
    }

    /// The sleep log, if this record is one
    #[must_use]
    pub const fn as_sleep(&self) -> Option<&SleepData> {
        match self {
            Self::Sleep(d) => Some(d),
            _ => None,
        }
    }

    /// The pain log, if this record is one
    #[must_use]
    pub const fn as_pain(&self) -> Option<&PainLogData> {
        match self {
            Self::Pain(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::{length, pace, time};
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .and_then(|d| d.and_hms_opt(7, 0, 0))
            .unwrap()
    }

    fn interval(meters: f64, seconds: f64) -> Interval {
        Interval {
            distance: Some(length::METERS.of(meters)),
            duration: Some(time::SECONDS.of(seconds)),
        }
    }

    #[test]
    fn test_interval_pace() {
        let pace = interval(400.0, 80.0).pace().unwrap();
        assert!((pace.value_in(pace::SECONDS_PER_100M) - 20.0).abs() < 1e-9);
        assert!(interval(0.0, 80.0).pace().is_none());
        let no_duration = Interval {
            distance: Some(length::METERS.of(400.0)),
            duration: None,
        };
        assert!(no_duration.pace().is_none());
    }

    #[test]
    fn test_workout_summary_groups_consecutive_distances() {
        let workout = RunningWorkout {
            intervals: vec![
                interval(400.0, 80.0),
                interval(400.0, 79.0),
                interval(1600.0, 360.0),
                Interval {
                    distance: None,
                    duration: Some(time::SECONDS.of(60.0)),
                },
                interval(400.0, 78.0),
            ],
        };
        assert_eq!(workout.summary(), "2 x 400 m, 1 x 1600 m, 1 x 400 m");
    }

    #[test]
    fn test_record_kind_and_date() {
        let note = TrainingData::Note(NoteData {
            date: date(),
            title: "Plan".into(),
            content: "Taper".into(),
            topic: None,
        });
        assert_eq!(note.kind(), RecordKind::Note);
        assert_eq!(note.kind().as_str(), "note");
        assert_eq!(note.date(), date());
        assert!(note.as_run().is_none());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let sleep = TrainingData::Sleep(SleepData {
            date: date(),
            duration: time::MINUTES.of(480.0),
            quality: Some(4),
        });
        let json = serde_json::to_value(&sleep).unwrap();
        assert_eq!(json["type"], "sleep");
        assert_eq!(json["quality"], 4);
        assert_eq!(json["duration"]["unit"], "min");
    }
}
