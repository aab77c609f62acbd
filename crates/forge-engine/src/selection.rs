//! The ores a player puts into the forge.

use forge_core::{OreCatalog, OrderedMap};
use serde::{Deserialize, Serialize};

/// Ore name → quantity, in the order ores were first added.
///
/// Adding the same ore twice sums the quantities. Blank names and quantities
/// that are not strictly positive are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSelection {
    quantities: OrderedMap<f64>,
}

impl IngredientSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an ore. Returns false if the entry was ignored.
    pub fn add(&mut self, name: &str, quantity: f64) -> bool {
        let name = name.trim();
        if name.is_empty() || !quantity.is_finite() || quantity <= 0.0 {
            return false;
        }
        match self.quantities.get_mut(name) {
            Some(existing) => *existing += quantity,
            None => {
                self.quantities.insert(name, quantity);
            }
        }
        true
    }

    /// Builder form of [`IngredientSelection::add`].
    pub fn with(mut self, name: &str, quantity: f64) -> Self {
        self.add(name, quantity);
        self
    }

    /// Drop ores the catalog does not know. Returns the dropped names.
    pub fn retain_known(&mut self, catalog: &OreCatalog) -> Vec<String> {
        let unknown: Vec<String> = self
            .quantities
            .keys()
            .filter(|name| !catalog.contains(name))
            .map(str::to_string)
            .collect();
        self.quantities.retain(|name, _| catalog.contains(name));
        unknown
    }

    /// Quantity selected for an ore.
    pub fn quantity(&self, name: &str) -> Option<f64> {
        self.quantities.get(name).copied()
    }

    /// Sum of all quantities, known and unknown ores alike.
    pub fn total(&self) -> f64 {
        self.quantities.values().sum()
    }

    /// Iterate over `(name, quantity)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities.iter().map(|(name, qty)| (name, *qty))
    }

    /// Number of distinct ores.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for IngredientSelection {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (name, quantity) in iter {
            selection.add(name, quantity);
        }
        selection
    }
}
