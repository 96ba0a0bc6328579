// ABOUTME: Core data models for the trainlog platform
// ABOUTME: Re-exports quantities, body locations, exercises and training records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Unit safe**: physical values are `Quantity<D>`; mixing dimensions does not compile
//! - **Closed vocabularies**: exercises and body locations are enums, never free strings
//! - **Immutable records**: parsers build records once, analytics only read them
//!
//! ## Core Models
//!
//! - `TrainingData`: one typed record (run, lift, sleep, pain, kayak, row, bike, note)
//! - `RepData`: one exercise set
//! - `BodyLocationWithSide`: a pain location with its side

/// Dimension-typed physical quantities
pub mod units;

mod body_location;
mod exercise;
mod training;

pub use body_location::{BodyLocation, BodyLocationWithSide, BodyRegion, Side};
pub use exercise::{Exercise, ExerciseMeasure};
pub use training::{
    BikeData, Interval, KayakData, LiftData, NoteData, PainAtLocationLogData, PainLogData,
    RecordKind, RepData, RowData, RunData, RunningWorkout, SleepData, TrainingData,
};
pub use units::{AnyQuantity, Quantity, Unit};
