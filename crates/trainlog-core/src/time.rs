// ABOUTME: Calendar-day keys shared by ingestion and analytics
// ABOUTME: Local wall-clock dates rendered as unpadded Y-M-D strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDateTime};

/// Day key in `Y-M-D` form without zero padding, e.g. `2025-2-1`
#[must_use]
pub fn get_day_string(date: NaiveDateTime) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
