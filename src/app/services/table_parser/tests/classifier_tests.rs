//! Tests for row classification

use super::super::classifier::{
    RowClass, SkipReason, classify_row, is_category_header, normalize_data_columns,
};
use crate::constants::DATA_COLUMN_COUNT;

fn columns(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

fn normalized(cells: &[&str]) -> Vec<String> {
    normalize_data_columns(&columns(cells))
}

#[test]
fn test_normalize_pads_short_rows() {
    let data_cols = normalized(&["5", "1"]);
    assert_eq!(data_cols.len(), DATA_COLUMN_COUNT);
    assert_eq!(data_cols[0], "5");
    assert_eq!(data_cols[1], "1");
    assert!(data_cols[2..].iter().all(String::is_empty));
}

#[test]
fn test_normalize_truncates_long_rows() {
    let long: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let data_cols = normalize_data_columns(&long);
    assert_eq!(data_cols.len(), DATA_COLUMN_COUNT);
    assert_eq!(data_cols[DATA_COLUMN_COUNT - 1], "12");
}

#[test]
fn test_header_predicate_accepts_bare_name_row() {
    assert!(is_category_header(&normalized(&[])));
}

#[test]
fn test_header_predicate_accepts_zero_cost_row() {
    let mut cells = vec![""; DATA_COLUMN_COUNT - 1];
    cells.push("0");
    assert!(is_category_header(&normalized(&cells)));
}

#[test]
fn test_header_predicate_rejects_nonzero_cost() {
    let mut cells = vec![""; DATA_COLUMN_COUNT - 1];
    cells.push("5");
    assert!(!is_category_header(&normalized(&cells)));
}

#[test]
fn test_header_predicate_rejects_notes_or_hardpoint_text() {
    // Notes column carries text
    let mut cells = vec![""; DATA_COLUMN_COUNT];
    cells[10] = "Strafe";
    assert!(!is_category_header(&normalized(&cells)));

    // Hardpoint column carries text
    let mut cells = vec![""; DATA_COLUMN_COUNT];
    cells[11] = "UHP";
    assert!(!is_category_header(&normalized(&cells)));
}

#[test]
fn test_header_predicate_rejects_multiple_stat_columns() {
    assert!(!is_category_header(&normalized(&["5", "1"])));
}

#[test]
fn test_header_predicate_allows_single_stray_stat() {
    // One non-empty range cell with no cost still reads as a header; this
    // is the accepted structural ambiguity of the heuristic.
    assert!(is_category_header(&normalized(&["", "5"])));
}

#[test]
fn test_classify_blank_name_is_skipped() {
    assert_eq!(
        classify_row(&columns(&["", "5", "1"])),
        RowClass::Skip(SkipReason::BlankName)
    );
    assert_eq!(classify_row(&[]), RowClass::Skip(SkipReason::BlankName));
}

#[test]
fn test_classify_repeated_table_header_is_skipped() {
    assert_eq!(
        classify_row(&columns(&["Weapon", "Acc", "Dmg"])),
        RowClass::Skip(SkipReason::TableHeader)
    );
    assert_eq!(
        classify_row(&columns(&["WEAPON"])),
        RowClass::Skip(SkipReason::TableHeader)
    );
}

#[test]
fn test_classify_suppressed_names_are_skipped() {
    assert_eq!(
        classify_row(&columns(&["MASER Generator 01", "0", "0"])),
        RowClass::Skip(SkipReason::SuppressedName)
    );
    // Case-insensitive, anywhere in the name
    assert_eq!(
        classify_row(&columns(&["generator pack"])),
        RowClass::Skip(SkipReason::SuppressedName)
    );
}

#[test]
fn test_classify_header_row() {
    assert_eq!(
        classify_row(&columns(&["Kinetic"])),
        RowClass::Header("Kinetic".to_string())
    );
}

#[test]
fn test_classify_data_row_splits_positional_fields() {
    let mut cells = vec!["PD Chaingun", "5", "1"];
    cells.extend(["", "", "", "", "", "", "", ""]);
    cells.extend(["Antimissile, Strafe", "hHP", "1"]);

    match classify_row(&columns(&cells)) {
        RowClass::Data(row) => {
            assert_eq!(row.name, "PD Chaingun");
            assert_eq!(row.range_cols.len(), 10);
            assert_eq!(row.range_cols[0], "5");
            assert_eq!(row.range_cols[1], "1");
            assert_eq!(row.notes_col, "Antimissile, Strafe");
            assert_eq!(row.hardpoint_col, "hHP");
            assert_eq!(row.cost_col, "1");
        }
        other => panic!("expected data row, got {:?}", other),
    }
}

#[test]
fn test_classify_short_data_row_pads_positional_fields() {
    // Ragged row: name and two range cells only
    match classify_row(&columns(&["Electron Gun", "5", "3"])) {
        RowClass::Data(row) => {
            assert_eq!(row.range_cols[0], "5");
            assert_eq!(row.range_cols[1], "3");
            assert!(row.notes_col.is_empty());
            assert!(row.hardpoint_col.is_empty());
            assert!(row.cost_col.is_empty());
        }
        other => panic!("expected data row, got {:?}", other),
    }
}
