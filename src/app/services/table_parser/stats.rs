//! Parsing statistics and result structures
//!
//! Tracks how the input rows were disposed of and pairs the final
//! document with those counters for reporting.

use crate::app::models::Document;

/// Parsing result with the assembled document and run statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The normalized output document
    pub document: Document,

    /// Row disposition statistics
    pub stats: ParseStats,
}

/// Row disposition counters for one parsing run
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ParseStats {
    /// Total input lines seen, blank lines included
    pub total_lines: usize,

    /// Blank or whitespace-only lines discarded before classification
    pub blank_lines: usize,

    /// Rows classified as category headers
    pub header_rows: usize,

    /// Rows classified as weapon data and committed to a category
    pub weapons_parsed: usize,

    /// Rows skipped (blank name, repeated table header, suppressed name)
    pub rows_skipped: usize,

    /// Categories in the final document
    pub categories_created: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows that reached classification
    pub fn classified_rows(&self) -> usize {
        self.header_rows + self.weapons_parsed + self.rows_skipped
    }
}
