// ABOUTME: Output formatting helpers for trainlog-cli
// ABOUTME: Renders reports as pretty JSON or aligned text blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::Serialize;
use trainlog::config::OutputFormat;
use trainlog::errors::AppResult;

/// Print `report` as JSON, or hand it to `render_text`
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    report: &T,
    render_text: impl FnOnce(&T),
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{json}");
        }
        OutputFormat::Text => render_text(report),
    }
    Ok(())
}

/// Section title underlined to its width
pub fn print_header(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(title.chars().count()));
}

/// One aligned `label value` line
pub fn print_field(label: &str, value: impl Display) {
    println!("   {label:<24} {value}");
}

/// Date-time as `YYYY-MM-DD HH:MM`, or `-`
pub fn format_date(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(|| "-".to_owned(), |d| d.format("%Y-%m-%d %H:%M").to_string())
}

/// Metric value with two decimals
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}
