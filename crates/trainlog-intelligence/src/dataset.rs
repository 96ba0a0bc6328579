// ABOUTME: Immutable, date-sorted view over typed training records
// ABOUTME: Precomputes first/last activity, per-kind partitions and one sub-dataset per training week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training data set
//!
//! All derived views are computed in the constructor and never mutated.
//! Week `idx` covers `[week_start(first_activity) + idx weeks, + 1 week)`.
//! A data set spanning a single week is its own week 0, so week
//! sub-datasets do not hold further partitions.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use tracing::debug;
use trainlog_core::models::{LiftData, PainLogData, RunData, SleepData, TrainingData};

use crate::time::{get_week_end, get_week_start, week_length};

static EMPTY: LazyLock<TrainingDataSet> = LazyLock::new(TrainingDataSet::default);

/// Date-ordered training records with precomputed partitions
#[derive(Debug, Clone, Default)]
pub struct TrainingDataSet {
    records: Vec<TrainingData>,
    first_activity: Option<NaiveDateTime>,
    last_activity: Option<NaiveDateTime>,
    runs: Vec<RunData>,
    lifts: Vec<LiftData>,
    sleeps: Vec<SleepData>,
    pain_logs: Vec<PainLogData>,
    weeks: Vec<TrainingDataSet>,
}

impl TrainingDataSet {
    /// Build a data set, sorting records by date (stable) and partitioning them into weeks
    #[must_use]
    pub fn new(records: Vec<TrainingData>) -> Self {
        let mut set = Self::flat(records);
        if set.number_of_weeks() > 1 {
            set.weeks = (0..set.number_of_weeks())
                .filter_map(|idx| set.date_range_for_week(idx))
                .map(|(start, _)| set.between(start, start + week_length()))
                .collect();
            debug!(
                records = set.records.len(),
                weeks = set.weeks.len(),
                "Partitioned training data into weeks"
            );
        }
        set
    }

    /// Sorted records with partitions but without week sub-datasets
    fn flat(mut records: Vec<TrainingData>) -> Self {
        records.sort_by_key(TrainingData::date);
        let first_activity = records.first().map(TrainingData::date);
        let last_activity = records.last().map(TrainingData::date);

        let mut set = Self {
            first_activity,
            last_activity,
            ..Self::default()
        };
        for record in &records {
            match record {
                TrainingData::Run(run) => set.runs.push(run.clone()),
                TrainingData::Lift(lift) => set.lifts.push(lift.clone()),
                TrainingData::Sleep(sleep) => set.sleeps.push(sleep.clone()),
                TrainingData::Pain(pain) => set.pain_logs.push(pain.clone()),
                _ => {}
            }
        }
        set.records = records;
        set
    }

    /// Records with `start <= date < end`, without week sub-datasets
    fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::flat(self.records_between(start, end).to_vec())
    }

    /// Sorted slice of the records with `start <= date < end`
    fn records_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> &[TrainingData] {
        let lo = self.records.partition_point(|r| r.date() < start);
        let hi = self.records.partition_point(|r| r.date() < end);
        self.records.get(lo..hi.max(lo)).unwrap_or_default()
    }

    /// Half-open period view `[start, end)` as a new data set
    #[must_use]
    pub fn slice(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(self.records_between(start, end).to_vec())
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[TrainingData] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the oldest record
    #[must_use]
    pub const fn first_activity(&self) -> Option<NaiveDateTime> {
        self.first_activity
    }

    /// Date of the newest record
    #[must_use]
    pub const fn last_activity(&self) -> Option<NaiveDateTime> {
        self.last_activity
    }

    /// Runs, oldest first
    #[must_use]
    pub fn runs(&self) -> &[RunData] {
        &self.runs
    }

    /// Strength sessions, oldest first
    #[must_use]
    pub fn lifts(&self) -> &[LiftData] {
        &self.lifts
    }

    /// Sleep logs, oldest first
    #[must_use]
    pub fn sleeps(&self) -> &[SleepData] {
        &self.sleeps
    }

    /// Pain snapshots, oldest first
    #[must_use]
    pub fn pain_logs(&self) -> &[PainLogData] {
        &self.pain_logs
    }

    /// Weeks from the first activity's week through the last activity's week
    #[must_use]
    pub fn number_of_weeks(&self) -> usize {
        let (Some(first), Some(last)) = (self.first_activity, self.last_activity) else {
            return 0;
        };
        // floor + 1 rather than ceil: a last activity exactly on a Monday
        // 00:00 boundary (span a whole multiple of 7 days) opens its own week.
        let span = last - get_week_start(first);
        let whole_weeks = span.num_milliseconds() / week_length().num_milliseconds();
        usize::try_from(whole_weeks).map_or(0, |weeks| weeks + 1)
    }

    /// Inclusive `(Monday 00:00, Sunday 23:59:59.999)` bounds of week `idx`
    ///
    /// `None` for an empty data set.
    #[must_use]
    pub fn date_range_for_week(&self, idx: usize) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first_start = get_week_start(self.first_activity?);
        let offset = i32::try_from(idx).ok()?;
        let start = first_start.checked_add_signed(week_length() * offset)?;
        Some((start, get_week_end(start)))
    }

    /// Week `idx`, or an empty data set when `idx` is out of range
    #[must_use]
    pub fn week(&self, idx: usize) -> &Self {
        if self.weeks.is_empty() {
            return if idx == 0 && !self.is_empty() { self } else { &EMPTY };
        }
        self.weeks.get(idx).unwrap_or(&EMPTY)
    }

    /// Every week in order, including empty ones between activities
    pub fn weeks(&self) -> impl Iterator<Item = &Self> + '_ {
        (0..self.number_of_weeks()).map(|idx| self.week(idx))
    }
}

impl From<Vec<TrainingData>> for TrainingDataSet {
    fn from(records: Vec<TrainingData>) -> Self {
        Self::new(records)
    }
}
