//! Test utilities and shared fixtures for table parser testing

// Test modules
mod classifier_tests;

use crate::constants::DATA_COLUMN_COUNT;

/// Build a tab-delimited row from a name and its data cells
pub fn tab_row(name: &str, data_cols: &[&str]) -> String {
    let mut cells = vec![name.to_string()];
    cells.extend(data_cols.iter().map(|cell| cell.to_string()));
    cells.join("\t")
}

/// Build a full-width row: name, two leading range cells, the rest of the
/// range cells empty, then notes, hardpoint, and cost in their columns.
pub fn full_row(
    name: &str,
    accuracy: &str,
    damage: &str,
    notes: &str,
    hardpoint: &str,
    cost: &str,
) -> String {
    let mut data_cols = vec![accuracy.to_string(), damage.to_string()];
    data_cols.resize(DATA_COLUMN_COUNT - 3, String::new());
    data_cols.push(notes.to_string());
    data_cols.push(hardpoint.to_string());
    data_cols.push(cost.to_string());

    let refs: Vec<&str> = data_cols.iter().map(String::as_str).collect();
    tab_row(name, &refs)
}

/// Build a header row in the shape the source tables use: a bare name with
/// every data column empty except a literal "0" in the cost column.
pub fn header_row(name: &str) -> String {
    let mut data_cols = vec![String::new(); DATA_COLUMN_COUNT - 1];
    data_cols.push("0".to_string());

    let refs: Vec<&str> = data_cols.iter().map(String::as_str).collect();
    tab_row(name, &refs)
}
