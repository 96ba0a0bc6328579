// ABOUTME: Batch invariants enforced after every point has been parsed individually
// ABOUTME: Keeps the first sleep log per calendar day and reports the rest as duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use trainlog_core::time::get_day_string;

use crate::errors::ParseError;
use crate::models::TrainingData;

/// Drop every sleep record after the first one on the same calendar day
///
/// Surviving records keep their input order. Each dropped record yields a
/// `"Duplicate sleep log on <Y-M-D>"` error.
#[must_use]
pub fn dedupe_sleep(records: Vec<TrainingData>) -> (Vec<TrainingData>, Vec<String>) {
    let mut seen_days = HashSet::new();
    let mut errors = Vec::new();
    let kept = records
        .into_iter()
        .filter(|record| {
            let TrainingData::Sleep(sleep) = record else {
                return true;
            };
            let day = get_day_string(sleep.date);
            if seen_days.insert(day.clone()) {
                true
            } else {
                errors.push(ParseError::duplicate_sleep_log(day).to_string());
                false
            }
        })
        .collect();
    (kept, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::units::time;
    use crate::models::{NoteData, SleepData};

    fn sleep(day: u32, hour: u32) -> TrainingData {
        TrainingData::Sleep(SleepData {
            date: NaiveDate::from_ymd_opt(2025, 2, day)
                .and_then(|d| d.and_hms_opt(hour, 0, 0))
                .unwrap(),
            duration: time::MINUTES.of(420.0),
            quality: None,
        })
    }

    fn note(day: u32) -> TrainingData {
        TrainingData::Note(NoteData {
            date: NaiveDate::from_ymd_opt(2025, 2, day)
                .and_then(|d| d.and_hms_opt(8, 0, 0))
                .unwrap(),
            title: "n".to_owned(),
            content: String::new(),
            topic: None,
        })
    }

    #[test]
    fn test_second_sleep_same_day_is_dropped() {
        let (kept, errors) = dedupe_sleep(vec![sleep(1, 6), note(1), sleep(1, 22), sleep(2, 6)]);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], sleep(1, 6));
        assert_eq!(kept[1], note(1));
        assert_eq!(kept[2], sleep(2, 6));
        assert_eq!(errors, vec!["Duplicate sleep log on 2025-2-1".to_owned()]);
    }
}
