//! Slug derivation for weapon identifiers

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::FALLBACK_SLUG;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Derive a lowercase hyphen-delimited slug from a display name
///
/// Every run of non-alphanumeric characters collapses to a single hyphen;
/// leading and trailing hyphens are trimmed. A name with no usable
/// characters falls back to a fixed placeholder.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
