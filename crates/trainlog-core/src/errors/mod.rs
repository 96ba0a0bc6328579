// ABOUTME: Error types shared across the trainlog workspace
// ABOUTME: Re-exports the ingestion error taxonomy used by parsers and post-processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! - `ParseError` - per-record ingestion failures, later rendered to strings
//!   and returned next to the successfully parsed records

mod parse;

pub use parse::{ErrorClass, ParseError, ParseResult};
