//! Application constants for the armory processor
//!
//! This module contains the column-geometry constants, literal markers,
//! and default values used throughout the processing pipeline.

// =============================================================================
// Table Geometry
// =============================================================================

/// Number of data columns every row is normalized to after the name column:
/// ten range cells, notes, hardpoint, cost.
pub const DATA_COLUMN_COUNT: usize = 13;

/// Number of leading data columns holding accuracy/damage range pairs
pub const RANGE_COLUMN_COUNT: usize = 10;

/// Number of range bands derived from the range columns (one per pair)
pub const RANGE_BAND_COUNT: usize = RANGE_COLUMN_COUNT / 2;

/// Index of the notes column within the normalized data columns
pub const NOTES_COLUMN_INDEX: usize = 10;

/// Index of the hardpoint column within the normalized data columns
pub const HARDPOINT_COLUMN_INDEX: usize = 11;

/// Index of the cost column within the normalized data columns
pub const COST_COLUMN_INDEX: usize = 12;

// =============================================================================
// Cell Markers and Row Literals
// =============================================================================

/// Not-applicable marker in weapon table cells (matched case-insensitively)
pub const NOT_APPLICABLE_MARKER: &str = "N/A";

/// First-column literal of a repeated table header row, skipped as noise
pub const TABLE_HEADER_LITERAL: &str = "weapon";

/// Rows whose name contains this fragment (case-insensitively) are
/// suppressed from the output dataset entirely.
pub const SUPPRESSED_NAME_FRAGMENT: &str = "generator";

/// Category synthesized for weapon rows that appear before any header row
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// Identifier used when a weapon name slugs down to nothing
pub const FALLBACK_SLUG: &str = "weapon";

// =============================================================================
// Input and Output Defaults
// =============================================================================

/// Weapon reference table bundled with the binary, used when no input
/// file is given on the command line.
pub const BUNDLED_WEAPONS_TABLE: &str = include_str!("../data/weapons.tsv");

/// Default output path for the generated JSON document
pub const DEFAULT_OUTPUT_PATH: &str = "data/weapons.json";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a cell carries the not-applicable marker
pub fn is_not_applicable(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(NOT_APPLICABLE_MARKER)
}
