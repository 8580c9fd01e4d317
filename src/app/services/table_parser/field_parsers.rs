//! Field normalization for weapon table cells
//!
//! Two independent best-effort conversions: cell text into typed values,
//! and the notes column into structured tag entries. Neither conversion
//! can fail; ambiguous text degrades to being retained as-is.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::{FieldValue, NoteTag};
use crate::constants::is_not_applicable;

static NOTE_WITH_PAYLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^()]+)\(([^()]+)\)$").expect("note pattern is valid"));

/// Convert one cell into a typed value
///
/// Empty input is absent. The not-applicable marker is preserved as a
/// distinct value, matched case-insensitively. Sign-prefixed integer text
/// ("+1", "-2") parses as a signed integer; text carrying a decimal point
/// tries floating point first. Anything else, dice notation like "8d6"
/// included, passes through as the original trimmed string.
pub fn parse_numeric(text: &str) -> Option<FieldValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_not_applicable(trimmed) {
        return Some(FieldValue::NotApplicable);
    }

    if trimmed.contains('.') {
        if let Ok(value) = trimmed.parse::<f64>() {
            return Some(FieldValue::Float(value));
        }
    } else if let Ok(value) = trimmed.parse::<i64>() {
        return Some(FieldValue::Int(value));
    } else if let Ok(value) = trimmed.parse::<f64>() {
        // Exponent forms without a decimal point
        return Some(FieldValue::Float(value));
    }

    Some(FieldValue::Text(trimmed.to_string()))
}

/// Parse a notes column into ordered tag entries
///
/// Segments are comma-separated; empty segments are dropped. A segment of
/// the form `name(payload)` carries its payload through [`parse_numeric`];
/// any other segment becomes a bare tag. Source order is preserved and
/// duplicate names are kept.
pub fn parse_notes(text: &str) -> Vec<NoteTag> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match NOTE_WITH_PAYLOAD.captures(segment) {
            Some(captures) => NoteTag {
                name: captures[1].trim().to_string(),
                value: parse_numeric(captures[2].trim()),
            },
            None => NoteTag {
                name: segment.to_string(),
                value: None,
            },
        })
        .collect()
}
