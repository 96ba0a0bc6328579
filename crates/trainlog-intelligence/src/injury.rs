// ABOUTME: Per-location injury timelines assembled from daily pain snapshots
// ABOUTME: Groups pain entries by body location and side, ordered by date within each location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use trainlog_core::models::{BodyLocationWithSide, PainLogData};

/// Pain at one location on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PainSnapshot {
    /// When the pain was logged
    pub date: NaiveDateTime,
    /// Severity 1-5
    pub pain: u8,
    /// Free-form description
    pub description: String,
}

/// Every logged snapshot for one body location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuryHistory {
    /// Location and side
    pub location: BodyLocationWithSide,
    /// Snapshots, oldest first
    pub snapshots: Vec<PainSnapshot>,
}

impl InjuryHistory {
    /// Most recent snapshot
    #[must_use]
    pub fn latest(&self) -> Option<&PainSnapshot> {
        self.snapshots.last()
    }

    /// Whether the latest snapshot still reports pain
    ///
    /// Ingestion only accepts severities 1-5, so every tracked location is
    /// open. The `>= 1` threshold mirrors the open-injury view of the training
    /// log and keeps a future 0 ("healed") severity closing the injury.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.latest().is_some_and(|snapshot| snapshot.pain >= 1)
    }
}

/// Group pain logs into one history per location, in order of first appearance
#[must_use]
pub fn injury_history(logs: &[PainLogData]) -> Vec<InjuryHistory> {
    let mut histories: Vec<InjuryHistory> = Vec::new();
    let mut index: HashMap<BodyLocationWithSide, usize> = HashMap::new();

    for log in logs {
        for pain in &log.pains {
            let slot = *index.entry(pain.location).or_insert_with(|| {
                histories.push(InjuryHistory {
                    location: pain.location,
                    snapshots: Vec::new(),
                });
                histories.len() - 1
            });
            if let Some(history) = histories.get_mut(slot) {
                history.snapshots.push(PainSnapshot {
                    date: log.date,
                    pain: pain.pain,
                    description: pain.description.clone(),
                });
            }
        }
    }

    for history in &mut histories {
        history.snapshots.sort_by_key(|snapshot| snapshot.date);
    }
    histories
}
