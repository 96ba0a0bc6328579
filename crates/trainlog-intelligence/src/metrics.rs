// ABOUTME: Pure analytics over training records: mileage, tonnage, pace, fatigue, time and heart beats
// ABOUTME: Empty inputs yield zero quantities; only training time can fail, on record kinds it does not know
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training metrics
//!
//! Every function here is a pure fold over already-typed records. Results are
//! unit-carrying quantities; callers pick the display unit with `value_in`.

use std::collections::BTreeMap;

use thiserror::Error;
use trainlog_core::models::units::{
    dimensionless, length, mass, pace, time, Dimensionless, Length, Mass, Pace, Time,
};
use trainlog_core::models::{
    BodyRegion, ExerciseMeasure, LiftData, PainLogData, Quantity, RecordKind, RepData, RunData,
    SleepData, TrainingData,
};

use crate::config::{FatigueConfig, PaceConfig, TonnageConfig};

/// Analytics failures
#[derive(Debug, Error)]
pub enum MetricError {
    /// A record kind this metric has no rule for
    #[error("Training time does not cover {kind} records")]
    UnsupportedRecordKind {
        /// Kind of the offending record
        kind: RecordKind,
    },
}

/// Tonnage moved in one set, in pounds
///
/// Carries scale with distance, isometric holds with time under tension, and
/// everything else with load plus any bodyweight bonus.
#[must_use]
pub fn rep_tonage(rep: &RepData, config: &TonnageConfig) -> Quantity<Mass> {
    let reps = f64::from(rep.reps);
    match (rep.exercise.measure(), rep.length, rep.time) {
        (ExerciseMeasure::Distance, Some(distance), _) => {
            rep.weight.to(mass::POUNDS) * reps * (distance.value_in(length::METERS) / 2.0)
        }
        (ExerciseMeasure::HeldDuration, _, Some(held)) => mass::POUNDS
            .of(config.bodyweight_lbs * config.held_duration_ratio)
            * held.value_in(time::SECONDS),
        _ => {
            let bonus = mass::POUNDS.of(config.bodyweight_lbs * config.bonus_ratio(rep.exercise));
            (rep.weight.to(mass::POUNDS) + bonus) * reps
        }
    }
}

/// Tonnage over every set of a session
#[must_use]
pub fn lift_tonage(lift: &LiftData, config: &TonnageConfig) -> Quantity<Mass> {
    Quantity::sum(
        lift.reps.iter().map(|rep| rep_tonage(rep, config)),
        mass::POUNDS,
    )
}

/// Tonnage over every session
#[must_use]
pub fn total_tonage(lifts: &[LiftData], config: &TonnageConfig) -> Quantity<Mass> {
    Quantity::sum(
        lifts.iter().map(|lift| lift_tonage(lift, config)),
        mass::POUNDS,
    )
}

/// Distance run, in miles
#[must_use]
pub fn total_mileage(runs: &[RunData]) -> Quantity<Length> {
    Quantity::sum(runs.iter().map(|run| run.distance), length::MILES)
}

/// Time spent moving across runs, in seconds
#[must_use]
pub fn total_moving_time(runs: &[RunData]) -> Quantity<Time> {
    Quantity::sum(runs.iter().map(|run| run.moving_time), time::SECONDS)
}

/// Total moving time over total distance, in minutes per mile
///
/// Zero when there is no moving time or no distance.
#[must_use]
pub fn average_pace(runs: &[RunData]) -> Quantity<Pace> {
    let moving = total_moving_time(runs);
    let distance = total_mileage(runs);
    if moving.is_zero() || distance.is_zero() {
        return Quantity::zero(pace::MINUTES_PER_MILE);
    }
    (moving / distance).to(pace::MINUTES_PER_MILE)
}

/// Fastest pace across runs, considering each run's intervals as well as its average
///
/// Runs and intervals shorter than `min_length` are ignored. `None` when no
/// run or interval qualifies.
#[must_use]
pub fn fastest_pace(runs: &[RunData], min_length: Quantity<Length>) -> Option<Quantity<Pace>> {
    runs.iter()
        .filter_map(|run| fastest_in_run(run, min_length))
        .reduce(Quantity::min)
        .map(|fastest| fastest.to(pace::MINUTES_PER_MILE))
}

fn fastest_in_run(run: &RunData, min_length: Quantity<Length>) -> Option<Quantity<Pace>> {
    let baseline = if run.distance >= min_length {
        run.pace()
    } else {
        None
    };
    let intervals = run
        .workout
        .iter()
        .flat_map(|workout| &workout.intervals)
        .filter(|interval| interval.distance.is_some_and(|d| d >= min_length))
        .filter_map(|interval| interval.pace());
    baseline.into_iter().chain(intervals).reduce(Quantity::min)
}

/// Peak severity per body region for one pain snapshot
#[must_use]
pub fn fatigue_by_region(log: &PainLogData) -> BTreeMap<BodyRegion, u8> {
    let mut regions = BTreeMap::new();
    for pain in &log.pains {
        let peak = regions.entry(pain.location.region()).or_insert(0);
        *peak = pain.pain.max(*peak);
    }
    regions
}

/// Weighted sum of per-region peak severities for one pain snapshot
#[must_use]
pub fn fatigue(log: &PainLogData, config: &FatigueConfig) -> Quantity<Dimensionless> {
    let score = fatigue_by_region(log)
        .into_iter()
        .map(|(region, severity)| f64::from(severity) * config.weight(region))
        .sum();
    dimensionless::ONE.of(score)
}

/// Time spent training across every record, in minutes
///
/// Sleep, pain and note records contribute nothing.
///
/// # Errors
///
/// Returns `MetricError::UnsupportedRecordKind` for a record kind without a
/// training-time rule.
pub fn training_time(records: &[TrainingData]) -> Result<Quantity<Time>, MetricError> {
    records
        .iter()
        .map(|record| match record {
            TrainingData::Run(run) => Ok(run.moving_time),
            TrainingData::Lift(lift) => Ok(lift.duration),
            TrainingData::Kayak(kayak) => Ok(kayak.duration),
            TrainingData::Row(row) => Ok(row.moving_time),
            TrainingData::Bike(bike) => Ok(bike.moving_time),
            TrainingData::Sleep(_) | TrainingData::Pain(_) | TrainingData::Note(_) => {
                Ok(Quantity::zero(time::MINUTES))
            }
            other => Err(MetricError::UnsupportedRecordKind { kind: other.kind() }),
        })
        .try_fold(Quantity::zero(time::MINUTES), |total, duration| {
            Ok(total + duration?)
        })
}

/// Number of intervals run at or under the stride pace threshold
#[must_use]
pub fn stride_count(runs: &[RunData], config: &PaceConfig) -> usize {
    runs.iter()
        .flat_map(|run| run.workout.iter().flat_map(|workout| &workout.intervals))
        .filter_map(|interval| interval.pace())
        .filter(|pace| pace.value_in(pace::SECONDS_PER_100M) <= config.stride_threshold_s_per_100m)
        .count()
}

/// Estimated heart beats during training: average heart rate times duration
///
/// Records without heart-rate data contribute nothing.
#[must_use]
pub fn training_heart_beats(records: &[TrainingData]) -> Quantity<Dimensionless> {
    Quantity::sum(
        records.iter().filter_map(|record| match record {
            TrainingData::Run(run) => run.average_heartrate.map(|hr| hr * run.moving_time),
            TrainingData::Kayak(kayak) => kayak.average_heartrate.map(|hr| hr * kayak.duration),
            TrainingData::Row(row) => row.average_heartrate.map(|hr| hr * row.moving_time),
            TrainingData::Bike(bike) => bike.average_heartrate.map(|hr| hr * bike.moving_time),
            _ => None,
        }),
        dimensionless::ONE,
    )
}

/// Mean sleep duration, `None` without sleep logs
#[must_use]
pub fn average_sleep_time(sleeps: &[SleepData]) -> Option<Quantity<Time>> {
    if sleeps.is_empty() {
        return None;
    }
    let total = Quantity::sum(sleeps.iter().map(|sleep| sleep.duration), time::HOURS);
    Some(total.per(sleeps.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use trainlog_core::models::units::frequency;
    use trainlog_core::models::{
        BodyLocation, BodyLocationWithSide, Exercise, Interval, NoteData, PainAtLocationLogData,
        RunningWorkout, Side,
    };

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3)
            .and_then(|d| d.and_hms_opt(7, 0, 0))
            .unwrap()
    }

    fn rep(exercise: Exercise, reps: u32, weight: Quantity<Mass>) -> RepData {
        RepData {
            exercise,
            reps,
            weight,
            length: None,
            time: None,
        }
    }

    fn run(meters: f64, seconds: f64, intervals: Vec<Interval>) -> RunData {
        RunData {
            date: date(),
            title: "Run".to_owned(),
            notes: String::new(),
            distance: length::METERS.of(meters),
            moving_time: time::SECONDS.of(seconds),
            elapsed_time: None,
            temperature_celsius: None,
            feels_like_celsius: None,
            description: None,
            private_note: None,
            shoe: None,
            average_heartrate: None,
            workout: (!intervals.is_empty()).then_some(RunningWorkout { intervals }),
        }
    }

    fn interval(meters: f64, seconds: f64) -> Interval {
        Interval {
            distance: Some(length::METERS.of(meters)),
            duration: Some(time::SECONDS.of(seconds)),
        }
    }

    fn pain(location: BodyLocation, side: Side, severity: u8) -> PainAtLocationLogData {
        PainAtLocationLogData {
            pain: severity,
            description: String::new(),
            location: BodyLocationWithSide::new(location, side),
        }
    }

    #[test]
    fn test_rep_tonage_one_rep() {
        let config = TonnageConfig::default();
        let tonage = rep_tonage(&rep(Exercise::Squat, 1, mass::KILOGRAMS.of(50.0)), &config);
        assert!((tonage.value_in(mass::POUNDS) - 110.231).abs() < 1e-3);
    }

    #[test]
    fn test_rep_tonage_bodyweight_bonus() {
        let config = TonnageConfig::default();
        let tonage = rep_tonage(&rep(Exercise::Pullup, 5, Quantity::zero(mass::POUNDS)), &config);
        assert!((tonage.value_in(mass::POUNDS) - 625.0).abs() < 1e-9);
    }

    #[test]
    fn test_rep_tonage_carry_scales_with_distance() {
        let config = TonnageConfig::default();
        let mut carry = rep(Exercise::FarmerCarry, 2, mass::POUNDS.of(24.0));
        carry.length = Some(length::METERS.of(15.0));
        assert!((rep_tonage(&carry, &config).value_in(mass::POUNDS) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_rep_tonage_hold_scales_with_time() {
        let config = TonnageConfig::default();
        let mut plank = rep(Exercise::Plank, 1, Quantity::zero(mass::POUNDS));
        plank.time = Some(time::MINUTES.of(1.0));
        assert!((rep_tonage(&plank, &config).value_in(mass::POUNDS) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_tonage() {
        let config = TonnageConfig::default();
        assert!(total_tonage(&[], &config).is_zero());

        let empty = LiftData {
            date: date(),
            title: String::new(),
            notes: None,
            duration: time::MINUTES.of(10.0),
            reps: Vec::new(),
        };
        let mixed = LiftData {
            reps: vec![
                rep(Exercise::Squat, 5, mass::POUNDS.of(50.0)),
                rep(Exercise::Bench, 5, mass::KILOGRAMS.of(20.0)),
            ],
            ..empty.clone()
        };
        let tonage = total_tonage(&[empty, mixed], &config);
        assert!((tonage.value_in(mass::POUNDS) - 470.462_262).abs() < 1e-5);
    }

    #[test]
    fn test_average_pace() {
        assert!(average_pace(&[]).is_zero());
        let runs = [run(1609.344, 420.0, Vec::new()), run(1609.344, 480.0, Vec::new())];
        assert!((average_pace(&runs).value_in(pace::MINUTES_PER_MILE) - 7.5).abs() < 1e-9);
        assert!((total_mileage(&runs).value_in(length::MILES) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_fastest_pace_prefers_intervals() {
        assert_eq!(fastest_pace(&[], Quantity::zero(length::METERS)), None);

        let steady = run(5000.0, 1500.0, Vec::new());
        let workout = run(5000.0, 1800.0, vec![interval(400.0, 72.0), interval(100.0, 14.0)]);
        let runs = [steady, workout];

        let fastest = fastest_pace(&runs, Quantity::zero(length::METERS)).unwrap();
        assert!((fastest.value_in(pace::SECONDS_PER_METER) - 0.14).abs() < 1e-9);

        let fastest = fastest_pace(&runs, length::METERS.of(200.0)).unwrap();
        assert!((fastest.value_in(pace::SECONDS_PER_METER) - 0.18).abs() < 1e-9);

        assert_eq!(fastest_pace(&runs, length::METERS.of(10_000.0)), None);
    }

    #[test]
    fn test_fatigue() {
        let config = FatigueConfig::default();
        let empty = PainLogData {
            date: date(),
            pains: Vec::new(),
        };
        assert!(fatigue(&empty, &config).is_zero());

        let log = PainLogData {
            date: date(),
            pains: vec![
                pain(BodyLocation::UpperBack, Side::None, 1),
                pain(BodyLocation::LowerBack, Side::None, 2),
                pain(BodyLocation::Calf, Side::Right, 1),
            ],
        };
        let regions = fatigue_by_region(&log);
        assert_eq!(regions.get(&BodyRegion::Back), Some(&2));
        assert_eq!(regions.get(&BodyRegion::LowerLeg), Some(&1));
        assert!((fatigue(&log, &config).amount() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_training_time() {
        let note = TrainingData::Note(NoteData {
            date: date(),
            title: String::new(),
            content: String::new(),
            topic: None,
        });
        let records = vec![
            TrainingData::Run(run(5000.0, 1800.0, Vec::new())),
            note,
            TrainingData::Lift(LiftData {
                date: date(),
                title: String::new(),
                notes: None,
                duration: time::MINUTES.of(45.0),
                reps: Vec::new(),
            }),
        ];
        let total = training_time(&records).unwrap();
        assert!((total.value_in(time::HOURS) - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_stride_count() {
        let runs = [run(
            5000.0,
            1800.0,
            vec![
                interval(100.0, 14.5),
                interval(100.0, 14.0),
                interval(100.0, 16.0),
                interval(400.0, 80.0),
            ],
        )];
        assert_eq!(stride_count(&runs, &PaceConfig::default()), 2);
    }

    #[test]
    fn test_training_heart_beats() {
        let mut with_hr = run(5000.0, 1800.0, Vec::new());
        with_hr.average_heartrate = Some(frequency::BEATS_PER_MINUTE.of(150.0));
        let records = [
            TrainingData::Run(with_hr),
            TrainingData::Run(run(5000.0, 1800.0, Vec::new())),
        ];
        assert!((training_heart_beats(&records).amount() - 4500.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_sleep_time() {
        assert_eq!(average_sleep_time(&[]), None);
        let sleeps = [
            SleepData {
                date: date(),
                duration: time::HOURS.of(7.0),
                quality: None,
            },
            SleepData {
                date: date(),
                duration: time::MINUTES.of(540.0),
                quality: Some(4),
            },
        ];
        let average = average_sleep_time(&sleeps).unwrap();
        assert!((average.value_in(time::HOURS) - 8.0).abs() < 1e-9);
    }
}
