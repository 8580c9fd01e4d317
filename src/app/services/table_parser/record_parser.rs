//! Weapon record assembly from classified data rows
//!
//! Extracts the typed fields of a [`WeaponRecord`] from a [`DataRow`]:
//! five range bands from the ten range cells, structured notes, the
//! hardpoint code, and the cost.

use super::classifier::DataRow;
use super::field_parsers::{parse_notes, parse_numeric};
use crate::app::models::{FieldValue, RangeBand, WeaponRecord};
use crate::constants::RANGE_BAND_COUNT;

/// Pair the range cells into exactly five accuracy/damage bands
pub fn parse_range_bands(range_cols: &[String]) -> Vec<RangeBand> {
    let mut ranges: Vec<RangeBand> = range_cols
        .chunks_exact(2)
        .map(|pair| RangeBand {
            accuracy: parse_numeric(&pair[0]),
            damage: parse_numeric(&pair[1]),
        })
        .collect();
    ranges.resize(RANGE_BAND_COUNT, RangeBand::empty());
    ranges.truncate(RANGE_BAND_COUNT);
    ranges
}

/// Parse the cost column
///
/// The not-applicable marker is coerced to absent here: cost has no
/// meaningful "not applicable" distinct from "unknown", unlike range
/// cells where the marker is preserved.
pub fn parse_cost(cost_col: &str) -> Option<FieldValue> {
    match parse_numeric(cost_col) {
        Some(FieldValue::NotApplicable) => None,
        other => other,
    }
}

/// Build a weapon record from a classified data row
///
/// The identifier is assigned by the document builder; everything else
/// derives from the row's columns.
pub fn build_weapon(row: &DataRow, id: String) -> WeaponRecord {
    let hardpoint = if row.hardpoint_col.is_empty() {
        None
    } else {
        Some(row.hardpoint_col.clone())
    };

    WeaponRecord {
        id,
        name: row.name.clone(),
        ranges: parse_range_bands(&row.range_cols),
        notes: parse_notes(&row.notes_col),
        hardpoint,
        cost: parse_cost(&row.cost_col),
    }
}
