// ABOUTME: Integration tests for loading training-log files through the library facade
// ABOUTME: Covers ingestion error isolation, week partitioning and analytics from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::path::Path;

use chrono::NaiveDate;
use trainlog::errors::ErrorCode;
use trainlog::models::units::{length, time};
use trainlog::{
    load_dataset, load_file, split_by_period, Analysis, GroupByDuration, IntelligenceConfig,
    Metric, RecordKind, TrainingData,
};

#[test]
fn test_load_file_isolates_bad_points() {
    let file = common::sample_log();
    let (records, errors) = load_file(file.path()).unwrap().into_pair();

    let kinds: Vec<RecordKind> = records.iter().map(TrainingData::kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::Run,
            RecordKind::Lift,
            RecordKind::Sleep,
            RecordKind::Pain,
            RecordKind::Run
        ]
    );
    assert_eq!(
        errors,
        vec![
            "No processor for swim version 1".to_owned(),
            "Duplicate sleep log on 2024-12-29".to_owned(),
        ]
    );
}

#[test]
fn test_missing_file_is_io_error() {
    common::init_test_logging();
    let error = load_file(Path::new("/nonexistent/trainlog/log.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::Io);
    assert_eq!(error.exit_code(), 74);
    assert!(error.message.contains("/nonexistent/trainlog/log.json"));
}

#[test]
fn test_invalid_json_is_invalid_input() {
    let file = common::write_log("[{\"version\": 1,");
    let error = load_file(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("is not valid JSON"));
}

#[test]
fn test_single_object_document_is_one_point() {
    let file = common::write_log(
        r#"{"version": 1, "type": "note", "date": "2025-01-01", "data": {"title": "Plan", "content": "Base"}}"#,
    );
    let outcome = load_file(file.path()).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_dataset_weeks_and_metrics() {
    let file = common::sample_log();
    let (dataset, errors) = load_dataset(file.path()).unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.number_of_weeks(), 2);
    assert_eq!(dataset.week(0).len(), 3);
    assert_eq!(dataset.week(1).len(), 2);

    let config = IntelligenceConfig::default();
    let analysis = Analysis::with_config(&dataset, &config);
    let total = analysis.get_metric(Metric::Mileage).unwrap();
    assert!((total - 16.836_325_9).abs() < 1e-6);
    assert!((analysis.get_metric_for_week(Metric::Mileage, 0).unwrap() - 6.836_325_9).abs() < 1e-6);
    assert!((analysis.get_metric_for_week(Metric::Mileage, 1).unwrap() - 10.0).abs() < 1e-6);
    assert!((analysis.total_mileage().value_in(length::METERS) - 27_095.44).abs() < 1e-6);

    let sleep = analysis.average_sleep_time().unwrap();
    assert!((sleep.value_in(time::HOURS) - 8.0).abs() < 1e-12);

    let open: Vec<String> = analysis
        .open_injuries()
        .iter()
        .map(|history| history.location.to_string())
        .collect();
    assert_eq!(open, vec!["Left Knee".to_owned()]);
}

#[test]
fn test_periods_from_file() {
    let file = common::sample_log();
    let (dataset, _) = load_dataset(file.path()).unwrap();
    let until = NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();

    let months = split_by_period(&dataset, GroupByDuration::OneMonth, until);
    let labels: Vec<String> = months
        .iter()
        .map(|period| period.label(GroupByDuration::OneMonth))
        .collect();
    assert_eq!(labels, vec!["Dec 2024".to_owned(), "Jan 2025".to_owned()]);
    assert_eq!(months[0].data.len(), 4);
    assert_eq!(months[1].data.len(), 1);

    let years = split_by_period(&dataset, GroupByDuration::OneYear, until);
    assert_eq!(years.len(), 2);
    assert_eq!(years[1].label(GroupByDuration::OneYear), "2025");
}
