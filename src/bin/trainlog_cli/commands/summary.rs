// ABOUTME: Summary command for trainlog-cli
// ABOUTME: Whole-log metrics, average sleep and open injuries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;
use trainlog::config::{CliConfig, IntelligenceConfig};
use trainlog::errors::AppResult;
use trainlog::models::units::time;
use trainlog::{load_dataset, Analysis};

use super::{metric_table, print_metrics, MetricValue};
use crate::helpers::display::{emit, format_date, format_value, print_field, print_header};

#[derive(Debug, Serialize)]
struct OpenInjury {
    location: String,
    pain: u8,
    since: Option<NaiveDateTime>,
    last_logged: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    records: usize,
    rejected: usize,
    first_activity: Option<NaiveDateTime>,
    last_activity: Option<NaiveDateTime>,
    weeks: usize,
    runs: usize,
    lifts: usize,
    metrics: Vec<MetricValue>,
    average_sleep_hours: Option<f64>,
    open_injuries: Vec<OpenInjury>,
}

/// Print totals for the whole training log
pub fn run(config: &CliConfig, intelligence: &IntelligenceConfig) -> AppResult<()> {
    let (dataset, errors) = load_dataset(config.require_data_path()?)?;
    let analysis = Analysis::with_config(&dataset, intelligence);

    let open_injuries = analysis
        .open_injuries()
        .into_iter()
        .filter_map(|history| {
            let latest = history.latest()?;
            Some(OpenInjury {
                location: history.location.to_string(),
                pain: latest.pain,
                since: history.snapshots.first().map(|s| s.date),
                last_logged: Some(latest.date),
            })
        })
        .collect();

    let report = SummaryReport {
        records: dataset.len(),
        rejected: errors.len(),
        first_activity: dataset.first_activity(),
        last_activity: dataset.last_activity(),
        weeks: dataset.number_of_weeks(),
        runs: dataset.runs().len(),
        lifts: dataset.lifts().len(),
        metrics: metric_table(&analysis)?,
        average_sleep_hours: analysis
            .average_sleep_time()
            .map(|sleep| sleep.value_in(time::HOURS)),
        open_injuries,
    };
    info!(records = report.records, weeks = report.weeks, "Computed summary");

    emit(config.output, &report, render)
}

fn render(report: &SummaryReport) {
    print_header("Training Log Summary");
    print_field("Records", report.records);
    print_field("Rejected points", report.rejected);
    print_field("First activity", format_date(report.first_activity));
    print_field("Last activity", format_date(report.last_activity));
    print_field("Weeks", report.weeks);
    print_field("Runs", report.runs);
    print_field("Lifts", report.lifts);

    print_header("Metrics");
    print_metrics(&report.metrics);
    print_field(
        "Average sleep",
        report
            .average_sleep_hours
            .map_or_else(|| "-".to_owned(), |hours| format!("{} hours", format_value(hours))),
    );

    print_header("Open Injuries");
    if report.open_injuries.is_empty() {
        println!("   None");
    }
    for injury in &report.open_injuries {
        print_field(
            &injury.location,
            format!("pain {} since {}", injury.pain, format_date(injury.since)),
        );
    }
}
