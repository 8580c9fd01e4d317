//! Row classification for weapon table rows
//!
//! Every non-empty tokenized row is committed to exactly one path: a
//! category header, a weapon data row, or a skip. Classification is a pure
//! function of the row's columns; the "current category" state it drives
//! lives in the orchestrating parser.

use crate::constants::{
    COST_COLUMN_INDEX, DATA_COLUMN_COUNT, HARDPOINT_COLUMN_INDEX, NOTES_COLUMN_INDEX,
    RANGE_COLUMN_COUNT, SUPPRESSED_NAME_FRAGMENT, TABLE_HEADER_LITERAL,
};

/// Why a row was excluded from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// First column was empty
    BlankName,
    /// Repeated table header row ("Weapon ...")
    TableHeader,
    /// Name matched the suppressed-row fragment
    SuppressedName,
}

/// Classification outcome for one tokenized row
#[derive(Debug, Clone, PartialEq)]
pub enum RowClass {
    /// Category boundary; the name of the category it opens
    Header(String),
    /// Weapon data row with normalized columns
    Data(DataRow),
    /// Row excluded from the output
    Skip(SkipReason),
}

/// A data row with its columns normalized to the fixed table geometry
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    /// Weapon display name (first column, verbatim)
    pub name: String,
    /// The ten range-pair cells
    pub range_cols: Vec<String>,
    /// Notes column text
    pub notes_col: String,
    /// Hardpoint column text
    pub hardpoint_col: String,
    /// Cost column text
    pub cost_col: String,
}

/// Normalize the columns after the name to exactly the expected count
///
/// Short rows are right-padded with empty strings, long rows truncated.
/// This makes downstream indexing positional regardless of how ragged the
/// source row was.
pub fn normalize_data_columns(columns: &[String]) -> Vec<String> {
    let mut data_cols: Vec<String> = columns.iter().take(DATA_COLUMN_COUNT).cloned().collect();
    data_cols.resize(DATA_COLUMN_COUNT, String::new());
    data_cols
}

/// Structural category-header heuristic
///
/// A row reads as a header when at most one data column is non-empty, the
/// cost column is empty or literally "0", and neither notes nor hardpoint
/// carries text. This is a structural proxy, not a semantic marker: a real
/// weapon with zero stats and zero cost would be misread as a header.
pub fn is_category_header(data_cols: &[String]) -> bool {
    let non_empty_columns = data_cols.iter().filter(|col| !col.trim().is_empty()).count();
    let cost = data_cols[COST_COLUMN_INDEX].trim();
    let has_detail = !data_cols[NOTES_COLUMN_INDEX].trim().is_empty()
        || !data_cols[HARDPOINT_COLUMN_INDEX].trim().is_empty();

    non_empty_columns <= 1 && (cost.is_empty() || cost == "0") && !has_detail
}

/// Classify one tokenized row
pub fn classify_row(columns: &[String]) -> RowClass {
    let name = columns.first().map(String::as_str).unwrap_or("").trim();
    let data_cols = normalize_data_columns(columns.get(1..).unwrap_or(&[]));

    if name.is_empty() {
        return RowClass::Skip(SkipReason::BlankName);
    }
    if name.eq_ignore_ascii_case(TABLE_HEADER_LITERAL) {
        return RowClass::Skip(SkipReason::TableHeader);
    }
    if name
        .to_ascii_lowercase()
        .contains(SUPPRESSED_NAME_FRAGMENT)
    {
        return RowClass::Skip(SkipReason::SuppressedName);
    }

    if is_category_header(&data_cols) {
        return RowClass::Header(name.to_string());
    }

    RowClass::Data(DataRow::from_data_columns(name, data_cols))
}

impl DataRow {
    /// Split normalized data columns into their positional fields
    fn from_data_columns(name: &str, mut data_cols: Vec<String>) -> Self {
        debug_assert_eq!(data_cols.len(), DATA_COLUMN_COUNT);
        let cost_col = data_cols.pop().unwrap_or_default();
        let hardpoint_col = data_cols.pop().unwrap_or_default();
        let notes_col = data_cols.pop().unwrap_or_default();
        data_cols.truncate(RANGE_COLUMN_COUNT);

        Self {
            name: name.to_string(),
            range_cols: data_cols,
            notes_col,
            hardpoint_col,
            cost_col,
        }
    }
}
