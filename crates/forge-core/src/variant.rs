//! Weapon variants: the sub-types a weapon outcome can drop as.

use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;

/// Outcome name → variant category, for every weapon base type.
///
/// Outcomes not listed here have no variants.
pub const WEAPON_CATEGORIES: &[(&str, &str)] = &[
    ("Dagger", "Daggers"),
    ("Straight Sword", "Straight Swords"),
    ("Gauntlet", "Gauntlets"),
    ("Katana", "Katanas"),
    ("Great Sword", "Great Swords"),
    ("Great Axe", "Great Axes"),
    ("Colossal Sword", "Colossal Swords"),
];

/// Look up the variant category for a weapon outcome name.
pub fn weapon_category(outcome: &str) -> Option<&'static str> {
    WEAPON_CATEGORIES
        .iter()
        .find(|(name, _)| *name == outcome)
        .map(|(_, category)| *category)
}

/// One drop entry for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantEntry {
    /// Independent drop chance in (0, 1].
    pub chance: f64,
    /// Damage before the ore multiplier.
    pub base_damage: f64,
    /// Seconds per attack cycle. Must be positive.
    pub attack_cycle_time: f64,
}

impl VariantEntry {
    /// Create a variant entry.
    pub fn new(chance: f64, base_damage: f64, attack_cycle_time: f64) -> Self {
        Self {
            chance,
            base_damage,
            attack_cycle_time,
        }
    }
}

/// Variants of one category: variant name → drop entries.
pub type VariantSet = OrderedMap<Vec<VariantEntry>>;

/// Every weapon category and its variants, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantCatalog {
    categories: OrderedMap<VariantSet>,
}

impl VariantCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a category.
    pub fn with_category(mut self, category: impl Into<String>, variants: VariantSet) -> Self {
        self.categories.insert(category, variants);
        self
    }

    /// Variants for a category name.
    pub fn category(&self, category: &str) -> Option<&VariantSet> {
        self.categories.get(category)
    }

    /// The category name and its variants for a weapon outcome.
    pub fn for_outcome(&self, outcome: &str) -> Option<(&'static str, &VariantSet)> {
        let category = weapon_category(outcome)?;
        self.category(category).map(|set| (category, set))
    }

    /// Iterate over categories in document order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &VariantSet)> {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
