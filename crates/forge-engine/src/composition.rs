//! Composition percentages and the blended multiplier.
//!
//! Two totals are in play. The composition and every count-based rule use the
//! raw total of all selected quantities. The multiplier is averaged over the
//! ores the catalog knows, weighted by their quantities, so unknown ores
//! neither add to nor dilute it.

use forge_core::{OreCatalog, OrderedMap};

use crate::selection::IngredientSelection;

/// Output of the composition step.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Raw total of every selected quantity.
    pub total_count: f64,
    /// Quantity-weighted average multiplier over known ores; 0 if none.
    pub combined_multiplier: f64,
    /// Ore name → percentage of the raw total, in selection order.
    pub percentages: OrderedMap<f64>,
}

/// Quantity-weighted average multiplier of the known ores in a selection.
pub fn combined_multiplier(selection: &IngredientSelection, catalog: &OreCatalog) -> f64 {
    let (weighted, known_count) = selection
        .iter()
        .filter_map(|(name, qty)| catalog.get(name).map(|ore| (ore.multiplier * qty, qty)))
        .fold((0.0, 0.0), |(sum, count), (weighted, qty)| {
            (sum + weighted, count + qty)
        });
    if known_count > 0.0 {
        weighted / known_count
    } else {
        0.0
    }
}

/// Each ore's share of the raw total, in percent.
pub fn composition_percentages(selection: &IngredientSelection) -> OrderedMap<f64> {
    let total = selection.total();
    selection
        .iter()
        .map(|(name, qty)| {
            let pct = if total > 0.0 { qty / total * 100.0 } else { 0.0 };
            (name, pct)
        })
        .collect()
}

/// Run the full composition step.
pub fn compose(selection: &IngredientSelection, catalog: &OreCatalog) -> Composition {
    Composition {
        total_count: selection.total(),
        combined_multiplier: combined_multiplier(selection, catalog),
        percentages: composition_percentages(selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::Ore;

    fn catalog() -> OreCatalog {
        OreCatalog::new()
            .with(Ore::new("OreX", 1.5, "Rare"))
            .with(Ore::new("OreY", 2.0, "Epic"))
    }

    #[test]
    fn weighted_multiplier_and_shares() {
        let selection = IngredientSelection::new().with("OreX", 2.0).with("OreY", 1.0);
        let comp = compose(&selection, &catalog());
        assert!((comp.combined_multiplier - 5.0 / 3.0).abs() < 1e-12);
        assert!((comp.percentages.get("OreX").unwrap() - 200.0 / 3.0).abs() < 1e-9);
        assert!((comp.percentages.get("OreY").unwrap() - 100.0 / 3.0).abs() < 1e-9);
        assert!((comp.total_count - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_ores_count_in_composition_only() {
        let selection = IngredientSelection::new().with("OreX", 2.0).with("Mystery", 2.0);
        let comp = compose(&selection, &catalog());
        // Multiplier ignores the unknown ore entirely.
        assert!((comp.combined_multiplier - 1.5).abs() < 1e-12);
        assert!((comp.percentages.get("Mystery").unwrap() - 50.0).abs() < 1e-9);
        assert!((comp.total_count - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multiplier_zero_without_known_ores() {
        let selection = IngredientSelection::new().with("Mystery", 5.0);
        assert_eq!(combined_multiplier(&selection, &catalog()), 0.0);
        assert_eq!(combined_multiplier(&IngredientSelection::new(), &catalog()), 0.0);
    }

    #[test]
    fn empty_selection_has_empty_composition() {
        let comp = compose(&IngredientSelection::new(), &catalog());
        assert!(comp.percentages.is_empty());
        assert_eq!(comp.total_count, 0.0);
    }

    #[test]
    fn percentages_keep_selection_order() {
        let selection = IngredientSelection::new().with("OreY", 1.0).with("OreX", 3.0);
        let names: Vec<_> = composition_percentages(&selection).keys().map(str::to_string).collect();
        assert_eq!(names, vec!["OreY", "OreX"]);
    }
}
