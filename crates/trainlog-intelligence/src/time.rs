// ABOUTME: Calendar helpers for week partitioning and day bucketing
// ABOUTME: Monday-start weeks on local wall-clock time, plus the shared Y-M-D day key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use trainlog_core::constants::time::DAYS_PER_WEEK;
pub use trainlog_core::time::get_day_string;

/// Length of one training week
#[must_use]
pub fn week_length() -> Duration {
    Duration::days(DAYS_PER_WEEK)
}

/// Monday 00:00:00.000 of the week containing `date`
#[must_use]
pub fn get_week_start(date: NaiveDateTime) -> NaiveDateTime {
    let day = date.date();
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    monday.and_time(NaiveTime::MIN)
}

/// Sunday 23:59:59.999 of the week starting at `week_start`
#[must_use]
pub fn get_week_end(week_start: NaiveDateTime) -> NaiveDateTime {
    get_week_start(week_start) + week_length() - Duration::milliseconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|day| day.and_hms_milli_opt(h, min, s, ms))
            .unwrap()
    }

    #[test]
    fn test_every_day_of_week_maps_to_monday() {
        let monday = at(2024, 12, 23, 0, 0, 0, 0);
        for offset in 0..7 {
            let day = monday + Duration::days(offset) + Duration::hours(13);
            assert_eq!(get_week_start(day), monday);
        }
        assert_eq!(get_week_start(at(2024, 12, 29, 23, 59, 59, 999)), monday);
        assert_eq!(get_week_start(at(2024, 12, 30, 0, 0, 0, 0)), at(2024, 12, 30, 0, 0, 0, 0));
    }

    #[test]
    fn test_week_end() {
        let start = at(2024, 12, 23, 0, 0, 0, 0);
        assert_eq!(get_week_end(start), at(2024, 12, 29, 23, 59, 59, 999));
    }
}
