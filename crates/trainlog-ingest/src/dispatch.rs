// ABOUTME: Batch ingestion entry points over arrays of raw training-log points
// ABOUTME: Parses points in parallel with rayon, then applies batch invariants sequentially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::TrainingData;
use crate::postprocess;
use crate::registry::parse_point;

/// Records and errors from one ingestion run, each in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    /// Successfully typed records
    pub records: Vec<TrainingData>,
    /// One human-readable message per rejected point
    pub errors: Vec<String>,
}

impl ParseOutcome {
    /// Split into `(records, errors)`
    #[must_use]
    pub fn into_pair(self) -> (Vec<TrainingData>, Vec<String>) {
        (self.records, self.errors)
    }
}

/// Parse an array of raw points
///
/// Points are independent, so they are parsed on the rayon pool; `collect`
/// preserves input order. The duplicate-sleep pass runs afterwards over the
/// full record list, so per-point format errors are always listed first.
#[must_use]
pub fn parse(points: &[Value]) -> ParseOutcome {
    let results: Vec<Result<TrainingData, String>> = points.par_iter().map(parse_point).collect();

    let mut records = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(error = %error, "Rejected training-log point");
                errors.push(error);
            }
        }
    }

    let (records, duplicates) = postprocess::dedupe_sleep(records);
    for error in &duplicates {
        warn!(error = %error, "Rejected duplicate sleep log");
    }
    errors.extend(duplicates);

    info!(
        points = points.len(),
        records = records.len(),
        errors = errors.len(),
        "Parsed training log"
    );
    ParseOutcome { records, errors }
}

/// Parse a whole training-log JSON document
///
/// The document is normally an array of points; any other JSON value is
/// treated as a single point.
///
/// # Errors
///
/// Returns an error only when `json` is not syntactically valid JSON.
pub fn parse_json_str(json: &str) -> serde_json::Result<ParseOutcome> {
    let document: Value = serde_json::from_str(json)?;
    Ok(match document {
        Value::Array(points) => parse(&points),
        single => parse(&[single]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_do_not_abort_batch() {
        let points = vec![
            json!({"version": 1, "type": "sleep", "date": "2025-02-01T06:00:00", "data": {"duration": 420}}),
            json!({"version": 7, "type": "sleep", "date": "2025-02-01", "data": {}}),
            json!({"version": 1, "type": "note", "date": "2025-02-02", "data": {"title": "t", "content": "c"}}),
        ];
        let (records, errors) = parse(&points).into_pair();
        assert_eq!(records.len(), 2);
        assert_eq!(errors, vec!["No processor for sleep version 7".to_owned()]);
    }

    #[test]
    fn test_duplicate_sleep_reported_after_format_errors() {
        let points = vec![
            json!({"version": 1, "type": "sleep", "date": "2025-02-01T06:00:00", "data": {"duration": 420}}),
            json!({"version": 1, "type": "sleep", "date": "2025-02-01T23:00:00", "data": {"duration": 30}}),
            json!({"version": 1, "type": "run", "date": "2025-02-01", "data": {}}),
        ];
        let (records, errors) = parse(&points).into_pair();
        assert_eq!(records.len(), 1);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Failed to parse run version 1"));
        assert_eq!(errors[1], "Duplicate sleep log on 2025-2-1");
    }

    #[test]
    fn test_parse_json_str() {
        let outcome = parse_json_str(r#"[{"version": 1, "type": "note", "date": "2025-01-01", "data": {"title": "a", "content": "b"}}]"#)
            .unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert!(parse_json_str("[{").is_err());
        assert_eq!(parse_json_str("{}").unwrap().errors.len(), 1);
    }
}
