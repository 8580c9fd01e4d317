//! Line tokenization for weapon table rows
//!
//! Splits one raw line into an ordered sequence of trimmed column strings,
//! choosing a delimiter strategy per line: strict tab splitting when the
//! line carries tab characters (preserving intentionally empty cells), or
//! splitting on runs of two or more whitespace characters for manually
//! aligned rows. A single space is never a separator, so multi-word names
//! stay intact.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace-run pattern is valid"));

/// Split a raw line into trimmed column strings
///
/// Empty cells between tabs are preserved as empty strings. Blank or
/// whitespace-only lines yield an empty sequence, which callers discard
/// before classification.
pub fn split_columns(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Vec::new();
    }

    if line.contains('\t') {
        line.split('\t').map(|cell| cell.trim().to_string()).collect()
    } else {
        WHITESPACE_RUN
            .split(line.trim())
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}
