// ABOUTME: Period breakdown command for trainlog-cli
// ABOUTME: Scores each non-empty calendar week, month, quarter, half-year or year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::debug;
use trainlog::config::{CliConfig, IntelligenceConfig};
use trainlog::errors::AppResult;
use trainlog::{load_dataset, split_by_period, Analysis, GroupByDuration};

use super::{metric_table, print_metrics, MetricValue};
use crate::helpers::display::{emit, format_date, print_field, print_header};

#[derive(Debug, Serialize)]
struct PeriodReport {
    label: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    records: usize,
    metrics: Vec<MetricValue>,
}

/// Print metrics for each calendar period up to `until` (default now)
pub fn run(
    config: &CliConfig,
    intelligence: &IntelligenceConfig,
    duration: GroupByDuration,
    until: Option<NaiveDateTime>,
) -> AppResult<()> {
    let (dataset, _) = load_dataset(config.require_data_path()?)?;
    let until = until.unwrap_or_else(|| Local::now().naive_local());
    debug!(%duration, %until, "Splitting training log into periods");

    let reports = split_by_period(&dataset, duration, until)
        .iter()
        .map(|period| {
            let analysis = Analysis::with_config(&period.data, intelligence);
            Ok(PeriodReport {
                label: period.label(duration),
                start: period.start,
                end: period.end,
                records: period.data.len(),
                metrics: metric_table(&analysis)?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    emit(config.output, reports.as_slice(), render)
}

fn render(periods: &[PeriodReport]) {
    if periods.is_empty() {
        println!("No training periods");
    }
    for period in periods {
        print_header(&period.label);
        print_field("From", format_date(Some(period.start)));
        print_field("To", format_date(Some(period.end)));
        print_field("Records", period.records);
        print_metrics(&period.metrics);
    }
}
