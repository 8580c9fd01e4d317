//! Parser for semi-structured weapon reference tables
//!
//! This module converts the raw table text, tab- or whitespace-aligned
//! rows with interleaved category headers and ragged column counts, into
//! the normalized document model. Parsing is a strict single forward pass
//! over the input lines with no look-ahead and no backtracking.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration over the line sequence
//! - [`tokenizer`] - Per-line delimiter strategy and column splitting
//! - [`field_parsers`] - Best-effort typed conversion of cell text
//! - [`classifier`] - Row classification into header/data/skip
//! - [`record_parser`] - Weapon record assembly from classified data rows
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use armory_processor::app::services::table_parser::TableParser;
//!
//! let text = "Kinetic\nAutocannon\t-2\t1\t-4\t1\t\t\t\t\t\t\tProjectile\tSHP\t14";
//! let result = TableParser::new().parse_text(text);
//!
//! assert_eq!(result.document.categories.len(), 1);
//! assert_eq!(result.stats.weapons_parsed, 1);
//! ```

pub mod classifier;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::{DataRow, RowClass, SkipReason};
pub use parser::TableParser;
pub use stats::{ParseResult, ParseStats};
