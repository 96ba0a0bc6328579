// ABOUTME: Core types and constants for the trainlog training-log platform
// ABOUTME: Foundation crate with unit quantities, vocabularies, typed records, and error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Core
//!
//! Foundation crate providing shared types for the trainlog workspace. The
//! ingestion and intelligence crates both build on these types, so this crate
//! is kept free of parsing and analysis logic.
//!
//! ## Modules
//!
//! - **models**: Unit quantities, body-location taxonomy, exercise vocabulary and training records
//! - **errors**: Ingestion error taxonomy (`ParseError`)
//! - **constants**: Unit conversion factors and shared numeric constants
//! - **time**: Calendar-day keys

/// Ingestion error taxonomy shared by every parser
pub mod errors;

/// Unit conversion factors and shared numeric constants
pub mod constants;

/// Core data models (quantities, body locations, exercises, training records)
pub mod models;

/// Calendar-day keys
pub mod time;
