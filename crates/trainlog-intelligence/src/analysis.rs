// ABOUTME: Analysis facade binding a training data set to the analytics configuration
// ABOUTME: Metric selection, per-week drill-down and injury history over one data set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis
//!
//! `Analysis` borrows a `TrainingDataSet` and scores it with an
//! `IntelligenceConfig`. Week analyses borrow the data set's precomputed week
//! partitions, so drilling down never re-sorts or copies records.

use std::fmt;

use serde::{Deserialize, Serialize};
use trainlog_core::models::units::{dimensionless, length, mass, pace, time, Length, Mass, Time};
use trainlog_core::models::Quantity;

use crate::config::IntelligenceConfig;
use crate::dataset::TrainingDataSet;
use crate::injury::{self, InjuryHistory};
use crate::metrics::{self, MetricError};

/// Scalar metric selectable for charts and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Distance run, miles
    Mileage,
    /// Training time, hours
    ActiveTime,
    /// Average run pace, minutes per mile
    Pace,
    /// Lift tonnage, tons
    Tonage,
    /// Estimated heart beats while training
    TrainingHeartBeats,
    /// Highest single-day fatigue score
    Fatigue,
    /// Intervals at stride pace
    Strides,
}

impl Metric {
    /// Every metric, in display order
    pub const ALL: [Self; 7] = [
        Self::Mileage,
        Self::ActiveTime,
        Self::Pace,
        Self::Tonage,
        Self::TrainingHeartBeats,
        Self::Fatigue,
        Self::Strides,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mileage => "Mileage",
            Self::ActiveTime => "Active Time",
            Self::Pace => "Pace",
            Self::Tonage => "Tonage",
            Self::TrainingHeartBeats => "Training Heart Beats",
            Self::Fatigue => "Fatigue",
            Self::Strides => "Strides",
        }
    }

    /// Unit the metric value is reported in
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Mileage => "miles",
            Self::ActiveTime => "hours",
            Self::Pace => "min/mile",
            Self::Tonage => "tons",
            Self::TrainingHeartBeats => "beats",
            Self::Fatigue => "score",
            Self::Strides => "strides",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analytics over one training data set
#[derive(Debug, Clone, Copy)]
pub struct Analysis<'a> {
    dataset: &'a TrainingDataSet,
    config: &'a IntelligenceConfig,
}

impl<'a> Analysis<'a> {
    /// Analyse `dataset` with the global configuration
    #[must_use]
    pub fn new(dataset: &'a TrainingDataSet) -> Self {
        Self::with_config(dataset, IntelligenceConfig::global())
    }

    /// Analyse `dataset` with an explicit configuration
    #[must_use]
    pub const fn with_config(dataset: &'a TrainingDataSet, config: &'a IntelligenceConfig) -> Self {
        Self { dataset, config }
    }

    /// Underlying data set
    #[must_use]
    pub const fn dataset(&self) -> &'a TrainingDataSet {
        self.dataset
    }

    /// Distance run
    #[must_use]
    pub fn total_mileage(&self) -> Quantity<Length> {
        metrics::total_mileage(self.dataset.runs())
    }

    /// Lift tonnage
    #[must_use]
    pub fn total_tonage(&self) -> Quantity<Mass> {
        metrics::total_tonage(self.dataset.lifts(), &self.config.tonnage)
    }

    /// Training time across every record
    ///
    /// # Errors
    ///
    /// Propagates `MetricError::UnsupportedRecordKind`.
    pub fn total_training_time(&self) -> Result<Quantity<Time>, MetricError> {
        metrics::training_time(self.dataset.records())
    }

    /// Mean sleep duration, `None` without sleep logs
    #[must_use]
    pub fn average_sleep_time(&self) -> Option<Quantity<Time>> {
        metrics::average_sleep_time(self.dataset.sleeps())
    }

    /// Highest single-day fatigue score, zero without pain logs
    #[must_use]
    pub fn peak_fatigue(&self) -> f64 {
        self.dataset
            .pain_logs()
            .iter()
            .map(|log| metrics::fatigue(log, &self.config.fatigue).value_in(dimensionless::ONE))
            .fold(0.0, f64::max)
    }

    /// Scalar value of `metric` in its reporting unit
    ///
    /// # Errors
    ///
    /// Returns an error when training time cannot be computed for a record kind.
    pub fn get_metric(&self, metric: Metric) -> Result<f64, MetricError> {
        let runs = self.dataset.runs();
        Ok(match metric {
            Metric::Mileage => self.total_mileage().value_in(length::MILES),
            Metric::ActiveTime => self.total_training_time()?.value_in(time::HOURS),
            Metric::Pace => metrics::average_pace(runs).value_in(pace::MINUTES_PER_MILE),
            Metric::Tonage => self.total_tonage().value_in(mass::TONS),
            Metric::TrainingHeartBeats => {
                metrics::training_heart_beats(self.dataset.records()).value_in(dimensionless::ONE)
            }
            Metric::Fatigue => self.peak_fatigue(),
            Metric::Strides => metrics::stride_count(runs, &self.config.pace) as f64,
        })
    }

    /// `metric` for week `week`
    ///
    /// # Errors
    ///
    /// Same as `get_metric`.
    pub fn get_metric_for_week(&self, metric: Metric, week: usize) -> Result<f64, MetricError> {
        self.analysis_for_week(week).get_metric(metric)
    }

    /// Analysis of week `idx`; empty when `idx` is out of range
    #[must_use]
    pub fn analysis_for_week(&self, idx: usize) -> Self {
        Self::with_config(self.dataset.week(idx), self.config)
    }

    /// One analysis per week from the first activity's week onward
    #[must_use]
    pub fn split_into_weeks(&self) -> Vec<Self> {
        self.dataset
            .weeks()
            .map(|week| Self::with_config(week, self.config))
            .collect()
    }

    /// Pain timelines per body location
    #[must_use]
    pub fn injury_history(&self) -> Vec<InjuryHistory> {
        injury::injury_history(self.dataset.pain_logs())
    }

    /// Locations whose latest snapshot still reports pain
    #[must_use]
    pub fn open_injuries(&self) -> Vec<InjuryHistory> {
        self.injury_history()
            .into_iter()
            .filter(InjuryHistory::is_open)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use trainlog_core::models::{RunData, TrainingData};

    fn run(y: i32, m: u32, d: u32, miles: f64, minutes: f64) -> TrainingData {
        let date: NaiveDateTime = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|day| day.and_hms_opt(7, 0, 0))
            .unwrap();
        TrainingData::Run(RunData {
            date,
            title: "Run".to_owned(),
            notes: String::new(),
            distance: length::MILES.of(miles),
            moving_time: time::MINUTES.of(minutes),
            elapsed_time: None,
            temperature_celsius: None,
            feels_like_celsius: None,
            description: None,
            private_note: None,
            shoe: None,
            average_heartrate: None,
            workout: None,
        })
    }

    #[test]
    fn test_metrics_per_week() {
        let config = IntelligenceConfig::default();
        let dataset = TrainingDataSet::new(vec![
            run(2025, 1, 6, 5.0, 40.0),
            run(2025, 1, 8, 3.0, 27.0),
            run(2025, 1, 21, 10.0, 90.0),
        ]);
        let analysis = Analysis::with_config(&dataset, &config);

        assert!((analysis.get_metric(Metric::Mileage).unwrap() - 18.0).abs() < 1e-9);
        assert!((analysis.get_metric(Metric::ActiveTime).unwrap() - 157.0 / 60.0).abs() < 1e-9);

        let weeks = analysis.split_into_weeks();
        assert_eq!(weeks.len(), 3);
        assert!((weeks[0].get_metric(Metric::Mileage).unwrap() - 8.0).abs() < 1e-9);
        assert!(weeks[1].get_metric(Metric::Mileage).unwrap().abs() < 1e-12);
        assert!(weeks[1].get_metric(Metric::Pace).unwrap().abs() < 1e-12);
        assert!((analysis.get_metric_for_week(Metric::Pace, 2).unwrap() - 9.0).abs() < 1e-9);
        assert!(analysis.get_metric_for_week(Metric::Mileage, 9).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_empty_analysis() {
        let config = IntelligenceConfig::default();
        let dataset = TrainingDataSet::default();
        let analysis = Analysis::with_config(&dataset, &config);
        for metric in Metric::ALL {
            assert!(analysis.get_metric(metric).unwrap().abs() < 1e-12, "{metric}");
        }
        assert!(analysis.split_into_weeks().is_empty());
        assert_eq!(analysis.average_sleep_time(), None);
        assert!(analysis.open_injuries().is_empty());
    }
}
