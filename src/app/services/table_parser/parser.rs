//! Core table parser implementation
//!
//! Orchestrates the single forward pass over the input lines: tokenize,
//! classify, and hand classified rows to the document builder. The
//! "current category" is an explicit accumulator threaded through the
//! pass, not shared state, so each run is deterministic and isolated.

use tracing::{debug, info};

use super::classifier::{RowClass, classify_row};
use super::record_parser::build_weapon;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::split_columns;
use crate::app::services::document_builder::DocumentBuilder;
use crate::constants::DEFAULT_CATEGORY_NAME;

/// Parser for semi-structured weapon reference tables
///
/// Stateless between runs; every call to [`parse_text`](Self::parse_text)
/// starts from a fresh document builder and fresh identifier counters, so
/// identical input yields identical output.
#[derive(Debug, Default)]
pub struct TableParser;

impl TableParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete table text into a document
    pub fn parse_text(&self, content: &str) -> ParseResult {
        self.parse_lines(content.lines())
    }

    /// Parse an ordered sequence of raw lines into a document
    pub fn parse_lines<'a, I>(&self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = DocumentBuilder::new();
        let mut stats = ParseStats::new();
        let mut current_category: Option<String> = None;

        for line in lines {
            stats.total_lines += 1;

            let columns = split_columns(line);
            if columns.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match classify_row(&columns) {
                RowClass::Skip(reason) => {
                    stats.rows_skipped += 1;
                    debug!("Skipped row '{}': {:?}", columns[0], reason);
                }
                RowClass::Header(name) => {
                    stats.header_rows += 1;
                    debug!("Category boundary: {}", name);
                    builder.ensure_category(&name);
                    current_category = Some(name);
                }
                RowClass::Data(row) => {
                    let category = current_category.get_or_insert_with(|| {
                        debug!(
                            "Data row '{}' before any header, defaulting to category '{}'",
                            row.name, DEFAULT_CATEGORY_NAME
                        );
                        DEFAULT_CATEGORY_NAME.to_string()
                    });

                    let id = builder.next_weapon_id(&row.name);
                    let weapon = build_weapon(&row, id);
                    builder.push_weapon(category, weapon);
                    stats.weapons_parsed += 1;
                }
            }
        }

        let document = builder.finish();
        stats.categories_created = document.categories.len();

        info!(
            "Parsed {} weapons across {} categories from {} lines ({} skipped)",
            stats.weapons_parsed, stats.categories_created, stats.total_lines, stats.rows_skipped
        );

        ParseResult { document, stats }
    }
}
