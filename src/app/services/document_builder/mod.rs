//! Document assembly for classified weapon rows
//!
//! Maintains the ordered category collection with an O(1) name index so
//! re-encountered header rows reuse their category, and assigns stable,
//! document-wide unique slug identifiers to weapon records.

pub mod slug;

#[cfg(test)]
pub mod tests;

use std::collections::HashMap;
use tracing::debug;

use crate::app::models::{Category, Document, WeaponRecord};
use slug::slugify;

/// Accumulator for the output document
///
/// Categories keep first-encountered order; weapons append in input order.
/// The slug counter spans the whole run, so identically named weapons in
/// different categories still receive distinct identifiers.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    slug_counts: HashMap<String, usize>,
}

impl DocumentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a category by name, creating it on first encounter
    ///
    /// Returns the category's position. Re-encountering an existing name
    /// reuses the category; no duplicates are ever created.
    pub fn ensure_category(&mut self, name: &str) -> usize {
        if let Some(&index) = self.category_index.get(name) {
            return index;
        }

        let index = self.categories.len();
        debug!("New category: {}", name);
        self.categories.push(Category::new(name));
        self.category_index.insert(name.to_string(), index);
        index
    }

    /// Assign the next unique identifier for a weapon name
    ///
    /// The first occurrence of a slug uses the bare slug; each subsequent
    /// occurrence appends `-<n>` with n starting at 2.
    pub fn next_weapon_id(&mut self, name: &str) -> String {
        let base = slugify(name);
        let count = self.slug_counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, count)
        }
    }

    /// Append a weapon to its owning category, creating the category if needed
    pub fn push_weapon(&mut self, category_name: &str, weapon: WeaponRecord) {
        let index = self.ensure_category(category_name);
        self.categories[index].weapons.push(weapon);
    }

    /// Number of categories created so far
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Consume the builder and produce the final document
    pub fn finish(self) -> Document {
        Document {
            categories: self.categories,
        }
    }
}
