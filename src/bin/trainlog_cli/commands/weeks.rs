// ABOUTME: Weekly breakdown command for trainlog-cli
// ABOUTME: Scores every Monday-aligned week of the training log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::Serialize;
use trainlog::config::{CliConfig, IntelligenceConfig};
use trainlog::errors::AppResult;
use trainlog::{load_dataset, Analysis};

use super::{metric_table, print_metrics, MetricValue};
use crate::helpers::display::{emit, format_date, print_field, print_header};

#[derive(Debug, Serialize)]
struct WeekReport {
    index: usize,
    start: NaiveDateTime,
    end: NaiveDateTime,
    records: usize,
    metrics: Vec<MetricValue>,
}

/// Print metrics for each week, optionally only the most recent `last`
pub fn run(
    config: &CliConfig,
    intelligence: &IntelligenceConfig,
    last: Option<usize>,
) -> AppResult<()> {
    let (dataset, _) = load_dataset(config.require_data_path()?)?;
    let analysis = Analysis::with_config(&dataset, intelligence);

    let total = dataset.number_of_weeks();
    let skip = last.map_or(0, |n| total.saturating_sub(n));
    let mut reports = Vec::with_capacity(total - skip);
    for index in skip..total {
        let Some((start, end)) = dataset.date_range_for_week(index) else {
            continue;
        };
        let week = analysis.analysis_for_week(index);
        reports.push(WeekReport {
            index,
            start,
            end,
            records: week.dataset().len(),
            metrics: metric_table(&week)?,
        });
    }

    emit(config.output, reports.as_slice(), render)
}

fn render(weeks: &[WeekReport]) {
    if weeks.is_empty() {
        println!("No training weeks");
    }
    for week in weeks {
        print_header(&format!("Week {} ({})", week.index + 1, format_date(Some(week.start))));
        print_field("Ends", format_date(Some(week.end)));
        print_field("Records", week.records);
        print_metrics(&week.metrics);
    }
}
