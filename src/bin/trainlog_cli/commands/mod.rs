// ABOUTME: Command modules for trainlog-cli
// ABOUTME: Summary, weekly, period and ingestion-log commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod log;
pub mod periods;
pub mod summary;
pub mod weeks;

use serde::Serialize;
use trainlog::errors::AppResult;
use trainlog::models::units::{format_minutes_per_mile, pace};
use trainlog::{Analysis, Metric};

use crate::helpers::display::{format_value, print_field};

/// One scored metric
#[derive(Debug, Serialize)]
pub struct MetricValue {
    pub metric: Metric,
    pub value: f64,
    pub unit: &'static str,
}

/// Score every selectable metric
pub fn metric_table(analysis: &Analysis<'_>) -> AppResult<Vec<MetricValue>> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            Ok(MetricValue {
                metric,
                value: analysis.get_metric(metric)?,
                unit: metric.unit_label(),
            })
        })
        .collect()
}

/// Text form of one metric value; pace reads as `M:SS/mile`
pub fn format_metric(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Pace => format_minutes_per_mile(pace::MINUTES_PER_MILE.of(value)),
        other => format!("{} {}", format_value(value), other.unit_label()),
    }
}

/// Text rendering of `metric_table`
pub fn print_metrics(metrics: &[MetricValue]) {
    for entry in metrics {
        print_field(entry.metric.name(), format_metric(entry.metric, entry.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_renders_as_minutes_and_seconds() {
        assert_eq!(format_metric(Metric::Pace, 7.5), "7:30/mile");
        assert_eq!(format_metric(Metric::Pace, 8.0), "8:00/mile");
        assert_eq!(format_metric(Metric::Mileage, 6.836_325_9), "6.84 miles");
        assert_eq!(format_metric(Metric::Tonage, 0.5), "0.50 tons");
    }
}
