// ABOUTME: Resolves free-text body-location phrases to side-qualified locations
// ABOUTME: Handles "left"/"right" prefixes and expands "both X" into a left and a right entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{ParseError, ParseResult};
use crate::models::{BodyLocation, BodyLocationWithSide, Side};

/// Resolve a phrase such as `"Left Foot Metatarsals"` or `"both feet"`
///
/// The result always has one entry, except for `"both ..."` which yields the
/// left entry followed by the right entry.
///
/// # Errors
///
/// Returns `UnknownBodyLocation` when the side-stripped phrase is not a
/// declared location name or alias.
pub fn parse_body_location(phrase: &str) -> ParseResult<Vec<BodyLocationWithSide>> {
    let normalized = phrase.trim().to_lowercase();

    if let Some(rest) = strip_word(&normalized, "both") {
        let mut locations = parse_body_location(&format!("left {rest}"))?;
        locations.extend(parse_body_location(&format!("right {rest}"))?);
        return Ok(locations);
    }

    let (side, rest) = if let Some(rest) = strip_word(&normalized, "left") {
        (Side::Left, rest)
    } else if let Some(rest) = strip_word(&normalized, "right") {
        (Side::Right, rest)
    } else {
        (Side::None, normalized.as_str())
    };

    let location = BodyLocation::from_name(rest)
        .ok_or_else(|| ParseError::unknown_body_location(phrase.trim()))?;
    Ok(vec![BodyLocationWithSide::new(location, side)])
}

/// Strip a leading whole word, so `"lefty"` is not read as a side
fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    text.strip_prefix(word)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
}
