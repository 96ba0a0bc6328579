// ABOUTME: Ingestion error taxonomy for raw training-log points
// ABOUTME: Covers unsupported schemas, malformed fields, unknown vocabulary and batch invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parse Error Types
//!
//! Every failure while turning a raw point into a typed record is one of these
//! variants. None of them abort a batch: the dispatcher renders them to strings
//! and keeps going with the next point.

/// Coarse classification of ingestion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// No parser registered for a `(type, version)` pair
    UnsupportedSchema,
    /// A value failed unit, number or date parsing
    MalformedField,
    /// An exercise name or body-location phrase is not in the vocabulary
    UnresolvableVocabulary,
    /// Duplicate sleep day or duplicate pain location
    BatchInvariant,
}

/// Errors raised while parsing a single raw point
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No parser is registered for this `(type, version)` pair
    #[error("No processor for {kind} version {version}")]
    UnsupportedSchema {
        /// Activity type tag from the raw point
        kind: String,
        /// Schema version from the raw point
        version: String,
    },

    /// A required field is absent from the payload
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: String,
    },

    /// A field is present but could not be interpreted
    #[error("Malformed field '{field}' ({value}): {reason}")]
    MalformedField {
        /// Name of the field
        field: String,
        /// Offending raw value, rendered as text
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Exercise name is not in the exercise vocabulary
    #[error("{name} is not a valid exercise")]
    UnknownExercise {
        /// Name as written in the log
        name: String,
    },

    /// Body-location phrase is not in the body-location vocabulary
    #[error("{phrase} is not a valid body location")]
    UnknownBodyLocation {
        /// Phrase as written in the log
        phrase: String,
    },

    /// The same body location appears twice in one pain log
    #[error("Duplicate pain location {location} in a single pain log")]
    DuplicatePainLocation {
        /// Display form of the repeated location
        location: String,
    },

    /// A second sleep log was found for a calendar day
    #[error("Duplicate sleep log on {day}")]
    DuplicateSleepLog {
        /// Day string in `Y-M-D` form
        day: String,
    },
}

impl ParseError {
    /// Create an "unsupported schema" error
    #[must_use]
    pub fn unsupported_schema(kind: impl Into<String>, version: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            kind: kind.into(),
            version: version.into(),
        }
    }

    /// Create a "missing field" error
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a "malformed field" error
    #[must_use]
    pub fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an "unknown exercise" error
    #[must_use]
    pub fn unknown_exercise(name: impl Into<String>) -> Self {
        Self::UnknownExercise { name: name.into() }
    }

    /// Create an "unknown body location" error
    #[must_use]
    pub fn unknown_body_location(phrase: impl Into<String>) -> Self {
        Self::UnknownBodyLocation {
            phrase: phrase.into(),
        }
    }

    /// Create a "duplicate pain location" error
    #[must_use]
    pub fn duplicate_pain_location(location: impl Into<String>) -> Self {
        Self::DuplicatePainLocation {
            location: location.into(),
        }
    }

    /// Create a "duplicate sleep log" error
    #[must_use]
    pub fn duplicate_sleep_log(day: impl Into<String>) -> Self {
        Self::DuplicateSleepLog { day: day.into() }
    }

    /// Which taxonomy class this error belongs to
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedSchema { .. } => ErrorClass::UnsupportedSchema,
            Self::MissingField { .. } | Self::MalformedField { .. } => ErrorClass::MalformedField,
            Self::UnknownExercise { .. } | Self::UnknownBodyLocation { .. } => {
                ErrorClass::UnresolvableVocabulary
            }
            Self::DuplicatePainLocation { .. } | Self::DuplicateSleepLog { .. } => {
                ErrorClass::BatchInvariant
            }
        }
    }
}

/// Result alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
