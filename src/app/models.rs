//! Data models for the normalized weapon document
//!
//! This module contains the core data structures produced by the parsing
//! pipeline: typed cell values, range bands, note tags, weapon records,
//! categories, and the top-level document handed to the JSON writer.

use serde::{Serialize, Serializer};

use crate::constants::NOT_APPLICABLE_MARKER;

// =============================================================================
// Typed Cell Values
// =============================================================================

/// A normalized table cell value
///
/// Numeric cells become integers or floats, the not-applicable marker is
/// preserved as a distinct value rather than coerced, and anything else
/// (dice notation such as "8d6", stray annotations) passes through as the
/// original trimmed text. Conversion is best-effort and never fails; see
/// [`parse_numeric`](crate::app::services::table_parser::field_parsers::parse_numeric).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Signed integer cell, sign prefixes ("+1", "-2") included
    Int(i64),
    /// Floating-point cell ("0.5")
    Float(f64),
    /// The literal not-applicable marker
    NotApplicable,
    /// Unparseable text retained verbatim
    Text(String),
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Float(value) => serializer.serialize_f64(*value),
            FieldValue::NotApplicable => serializer.serialize_str(NOT_APPLICABLE_MARKER),
            FieldValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::NotApplicable => f.write_str(NOT_APPLICABLE_MARKER),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Weapon Record Structure
// =============================================================================

/// One accuracy/damage pair for a single range increment
///
/// Absent sides serialize as `null`; the not-applicable marker serializes
/// as the literal `"N/A"` string, keeping the two states distinct in the
/// output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBand {
    /// To-hit modifier at this range increment
    pub accuracy: Option<FieldValue>,

    /// Damage rating at this range increment
    pub damage: Option<FieldValue>,
}

impl RangeBand {
    /// A band with neither side supplied
    pub fn empty() -> Self {
        Self {
            accuracy: None,
            damage: None,
        }
    }
}

/// A semantic modifier keyword attached to a weapon, optionally carrying
/// a parenthesized payload (e.g. `Swarm(12)`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteTag {
    /// Modifier keyword as written in the notes column
    pub name: String,

    /// Payload value, present only when the source supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

/// A single normalized weapon row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponRecord {
    /// Document-wide unique slug identifier
    pub id: String,

    /// Display name exactly as written in the source row
    pub name: String,

    /// Exactly five range bands, short through extreme+
    pub ranges: Vec<RangeBand>,

    /// Note tags in source order, duplicates kept
    pub notes: Vec<NoteTag>,

    /// Mounting/size classification code (e.g. "UHP", "SHP")
    pub hardpoint: Option<String>,

    /// Purchase cost; the not-applicable marker is coerced to absent here,
    /// unlike range cells where it is preserved
    pub cost: Option<FieldValue>,
}

// =============================================================================
// Document Structure
// =============================================================================

/// A named grouping of weapons introduced by a header row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// Category name, unique within the document
    pub name: String,

    /// Weapons in input order
    pub weapons: Vec<WeaponRecord>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weapons: Vec::new(),
        }
    }
}

/// The complete normalized output document
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Document {
    /// Categories in first-encountered order
    pub categories: Vec<Category>,
}

impl Document {
    /// Total number of weapons across all categories
    pub fn weapon_count(&self) -> usize {
        self.categories.iter().map(|c| c.weapons.len()).sum()
    }

    /// Iterate over every weapon in document order
    pub fn weapons(&self) -> impl Iterator<Item = &WeaponRecord> {
        self.categories.iter().flat_map(|c| c.weapons.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_serialization() {
        assert_eq!(serde_json::to_value(FieldValue::Int(-2)).unwrap(), json!(-2));
        assert_eq!(
            serde_json::to_value(FieldValue::Float(0.5)).unwrap(),
            json!(0.5)
        );
        assert_eq!(
            serde_json::to_value(FieldValue::NotApplicable).unwrap(),
            json!("N/A")
        );
        assert_eq!(
            serde_json::to_value(FieldValue::Text("8d6".to_string())).unwrap(),
            json!("8d6")
        );
    }

    #[test]
    fn test_range_band_serializes_absent_sides_as_null() {
        let band = RangeBand {
            accuracy: Some(FieldValue::Int(1)),
            damage: None,
        };
        assert_eq!(
            serde_json::to_value(band).unwrap(),
            json!({"accuracy": 1, "damage": null})
        );
    }

    #[test]
    fn test_note_tag_omits_absent_value() {
        let bare = NoteTag {
            name: "Projectile".to_string(),
            value: None,
        };
        assert_eq!(
            serde_json::to_value(bare).unwrap(),
            json!({"name": "Projectile"})
        );

        let payloaded = NoteTag {
            name: "Swarm".to_string(),
            value: Some(FieldValue::Int(12)),
        };
        assert_eq!(
            serde_json::to_value(payloaded).unwrap(),
            json!({"name": "Swarm", "value": 12})
        );
    }

    #[test]
    fn test_weapon_record_serializes_all_keys() {
        let weapon = WeaponRecord {
            id: "pd-chaingun".to_string(),
            name: "PD Chaingun".to_string(),
            ranges: vec![RangeBand::empty(); 5],
            notes: vec![],
            hardpoint: None,
            cost: None,
        };

        let value = serde_json::to_value(weapon).unwrap();
        let object = value.as_object().unwrap();
        for key in ["id", "name", "ranges", "notes", "hardpoint", "cost"] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object["hardpoint"], json!(null));
        assert_eq!(object["cost"], json!(null));
    }

    #[test]
    fn test_document_weapon_count() {
        let mut document = Document::default();
        document.categories.push(Category::new("Kinetic"));
        assert_eq!(document.weapon_count(), 0);
        assert_eq!(document.weapons().count(), 0);
    }
}
