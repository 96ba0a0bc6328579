// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Unit conversion factors, default units and date formats used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values are grouped by domain so call sites read as
//! `units::METERS_PER_MILE` rather than bare literals.

/// Unit conversion factors, all expressed against the SI base unit
pub mod units {
    /// Kilograms in one avoirdupois pound
    pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;
    /// Pounds in one short ton
    pub const POUNDS_PER_TON: f64 = 2000.0;
    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Meters in one statute mile
    pub const METERS_PER_MILE: f64 = 1609.344;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Meters in the 100m reference distance used for sprint paces
    pub const METERS_PER_HUNDRED: f64 = 100.0;
}

/// Time constants used by the calendar utilities
pub mod time {
    /// Days in one training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Lift log constants
pub mod lift {
    /// Most sets one `sets x reps x weight` rep-spec may expand into
    pub const MAX_SETS: u32 = 100;
}

/// Pain log constants
pub mod pain {
    /// Lowest accepted pain severity
    pub const MIN_SEVERITY: u8 = 1;
    /// Highest accepted pain severity
    pub const MAX_SEVERITY: u8 = 5;
}

/// Sleep log constants
pub mod sleep {
    /// Lowest accepted sleep quality score
    pub const MIN_QUALITY: u8 = 1;
    /// Highest accepted sleep quality score
    pub const MAX_QUALITY: u8 = 5;
}

/// Date formats accepted for raw point timestamps, tried in order
pub mod date_formats {
    /// Naive ISO-like formats with a time component
    pub const NAIVE_DATE_TIME: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%b %d, %Y, %I:%M:%S %p",
        "%b %d, %Y, %I:%M %p",
        "%B %d, %Y, %I:%M:%S %p",
    ];
    /// Date-only formats, interpreted as local midnight
    pub const NAIVE_DATE: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"];
}
