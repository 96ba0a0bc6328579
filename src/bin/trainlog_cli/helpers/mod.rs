// ABOUTME: Shared helpers for trainlog-cli commands
// ABOUTME: Output rendering and argument parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use trainlog::errors::{AppError, AppResult};

/// Parse `--until YYYY-MM-DD` as the end of that day
pub fn parse_until(value: &str) -> AppResult<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::invalid_input(format!("Invalid --until '{value}', expected YYYY-MM-DD: {e}"))
    })?;
    day.succ_opt()
        .map(|next| next.and_time(NaiveTime::MIN))
        .ok_or_else(|| AppError::invalid_input(format!("--until '{value}' is out of range")))
}
