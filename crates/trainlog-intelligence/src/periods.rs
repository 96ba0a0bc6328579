// ABOUTME: Calendar-aligned bucketing of a data set into weeks, months, quarters, halves or years
// ABOUTME: Produces only non-empty periods and labels them from their oldest activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Period splitting
//!
//! Unlike week partitioning, periods are aligned to the calendar (the 1st of
//! the month, quarter starts, January and July, New Year) and are produced
//! only for buckets that hold at least one record.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::dataset::TrainingDataSet;
use crate::time::{get_week_start, week_length};

/// Bucket size for period splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupByDuration {
    /// Monday-start weeks
    OneWeek,
    /// Calendar months
    OneMonth,
    /// Calendar quarters
    ThreeMonths,
    /// January-June and July-December
    SixMonths,
    /// Calendar years
    OneYear,
}

impl GroupByDuration {
    /// Every bucket size, smallest first
    pub const ALL: [Self; 5] = [
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
        }
    }

    /// Start of the period containing `date`
    #[must_use]
    pub fn period_start(self, date: NaiveDateTime) -> NaiveDateTime {
        let first_of = |month0: u32| {
            NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1)
                .map_or(date, |day| day.and_time(NaiveTime::MIN))
        };
        match self {
            Self::OneWeek => get_week_start(date),
            Self::OneMonth => first_of(date.month0()),
            Self::ThreeMonths => first_of(date.month0() / 3 * 3),
            Self::SixMonths => first_of(if date.month0() < 6 { 0 } else { 6 }),
            Self::OneYear => first_of(0),
        }
    }

    /// Start of the period after the one starting at `start`
    #[must_use]
    pub fn next_period_start(self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::OneWeek => start.checked_add_signed(week_length()),
            Self::OneMonth => start.checked_add_months(Months::new(1)),
            Self::ThreeMonths => start.checked_add_months(Months::new(3)),
            Self::SixMonths => start.checked_add_months(Months::new(6)),
            Self::OneYear => start.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for GroupByDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One non-empty calendar period
#[derive(Debug, Clone)]
pub struct PeriodData {
    /// First instant of the period
    pub start: NaiveDateTime,
    /// Last millisecond of the period
    pub end: NaiveDateTime,
    /// Records falling in the period
    pub data: TrainingDataSet,
}

impl PeriodData {
    /// Label of this period, see `period_label`
    #[must_use]
    pub fn label(&self, duration: GroupByDuration) -> String {
        period_label(&self.data, duration)
    }
}

/// Split `dataset` into calendar periods from its first activity's period up to `until`
///
/// Only periods holding at least one record are returned.
#[must_use]
pub fn split_by_period(
    dataset: &TrainingDataSet,
    duration: GroupByDuration,
    until: NaiveDateTime,
) -> Vec<PeriodData> {
    let Some(first) = dataset.first_activity() else {
        return Vec::new();
    };

    let mut periods = Vec::new();
    let mut current = duration.period_start(first);
    while current < until {
        let Some(next) = duration.next_period_start(current) else {
            break;
        };
        let data = dataset.slice(current, next);
        if !data.is_empty() {
            periods.push(PeriodData {
                start: current,
                end: next - Duration::milliseconds(1),
                data,
            });
        }
        current = next;
    }
    periods
}

/// Label for a period, derived from its oldest activity
///
/// `"Jan 2, 2025"` for weeks, `"Jan 2025"` for months, `"Q1 2025"`,
/// `"H2 2025"`, `"2025"`, and `"No Data"` for an empty period.
#[must_use]
pub fn period_label(data: &TrainingDataSet, duration: GroupByDuration) -> String {
    let Some(start) = data.first_activity() else {
        return "No Data".to_owned();
    };
    match duration {
        GroupByDuration::OneWeek => start.format("%b %-d, %Y").to_string(),
        GroupByDuration::OneMonth => start.format("%b %Y").to_string(),
        GroupByDuration::ThreeMonths => format!("Q{} {}", start.month0() / 3 + 1, start.year()),
        GroupByDuration::SixMonths => {
            let half = if start.month0() < 6 { "H1" } else { "H2" };
            format!("{half} {}", start.year())
        }
        GroupByDuration::OneYear => start.year().to_string(),
    }
}
