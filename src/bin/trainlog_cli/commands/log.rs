// ABOUTME: Ingestion log commands for trainlog-cli
// ABOUTME: Lists rejected points and the registered record-kind schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use trainlog::config::{CliConfig, OutputFormat};
use trainlog::errors::AppResult;
use trainlog::{load_file, registered_kinds};

use crate::helpers::display::{emit, print_field, print_header};

#[derive(Debug, Serialize)]
struct ErrorReport {
    records: usize,
    errors: Vec<String>,
}

/// Print every point rejected while ingesting the log
pub fn errors(config: &CliConfig) -> AppResult<()> {
    let (records, errors) = load_file(config.require_data_path()?)?.into_pair();
    let report = ErrorReport {
        records: records.len(),
        errors,
    };
    emit(config.output, &report, |report| {
        print_header("Ingestion Errors");
        print_field("Accepted records", report.records);
        print_field("Rejected points", report.errors.len());
        for error in &report.errors {
            println!("   - {error}");
        }
    })
}

/// Print the `<kind><version>` keys the ingester accepts
pub fn kinds(output: OutputFormat) -> AppResult<()> {
    let kinds = registered_kinds();
    emit(output, &kinds, |kinds| {
        print_header("Registered Record Kinds");
        for kind in kinds {
            println!("   {kind}");
        }
    })
}
