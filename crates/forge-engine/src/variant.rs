//! Weapon variant projections: drop odds, scaled damage, and DPS for each
//! sub-type a weapon outcome can drop as.

use forge_core::{OrderedMap, VariantCatalog, VariantEntry};
use serde::Serialize;

use crate::fraction::{Fraction, approximate_fraction};

/// The multiplier applied to variant damage. Non-positive or non-finite
/// combined multipliers fall back to 1.
pub fn effective_multiplier(combined_multiplier: f64) -> f64 {
    if combined_multiplier.is_finite() && combined_multiplier > 0.0 {
        combined_multiplier
    } else {
        1.0
    }
}

/// Base damage scaled by the ore multiplier.
pub fn scaled_damage(base_damage: f64, combined_multiplier: f64) -> f64 {
    base_damage * effective_multiplier(combined_multiplier) * 2.0
}

/// One projected variant row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantProjection {
    /// Variant display name.
    pub name: String,
    /// Drop chance as a simplified fraction.
    pub fraction: Fraction,
    /// Drop chance as listed in the catalog.
    pub chance: f64,
    /// Damage after the multiplier.
    pub scaled_damage: f64,
    /// Seconds per attack cycle.
    pub attack_cycle_time: f64,
    /// Damage per second.
    pub dps: f64,
}

impl VariantProjection {
    /// Project one catalog entry.
    ///
    /// The cycle time is trusted to be positive; a zero yields an infinite DPS.
    pub fn project(name: &str, entry: &VariantEntry, combined_multiplier: f64, cap: u64) -> Self {
        let damage = scaled_damage(entry.base_damage, combined_multiplier);
        Self {
            name: name.to_string(),
            fraction: approximate_fraction(entry.chance, cap),
            chance: entry.chance,
            scaled_damage: damage,
            attack_cycle_time: entry.attack_cycle_time,
            dps: damage / entry.attack_cycle_time,
        }
    }
}

impl std::fmt::Display for VariantProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {:.2} dmg / {}s = {:.2} dps",
            self.name, self.fraction, self.scaled_damage, self.attack_cycle_time, self.dps
        )
    }
}

/// Projected variants of one weapon outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGroup {
    /// The outcome name from the odds table (e.g. "Katana").
    pub outcome: String,
    /// Variant category the outcome maps to.
    pub category: String,
    /// Projected rows, in catalog order.
    pub variants: Vec<VariantProjection>,
}

/// Project the variants of a single outcome. `None` if the outcome has no
/// category or the catalog has no variants for it.
pub fn project_variants(
    outcome: &str,
    combined_multiplier: f64,
    catalog: &VariantCatalog,
    cap: u64,
) -> Option<VariantGroup> {
    let (category, set) = catalog.for_outcome(outcome)?;
    let variants: Vec<VariantProjection> = set
        .iter()
        .flat_map(|(name, entries)| {
            entries
                .iter()
                .map(move |entry| VariantProjection::project(name, entry, combined_multiplier, cap))
        })
        .collect();

    if variants.is_empty() {
        return None;
    }
    Some(VariantGroup {
        outcome: outcome.to_string(),
        category: category.to_string(),
        variants,
    })
}

/// Project variants for every outcome in a resolved odds map, in odds order.
pub fn project_outcomes(
    odds: &OrderedMap<f64>,
    combined_multiplier: f64,
    catalog: &VariantCatalog,
    cap: u64,
) -> Vec<VariantGroup> {
    odds.keys()
        .filter_map(|outcome| project_variants(outcome, combined_multiplier, catalog, cap))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::VariantSet;

    fn catalog() -> VariantCatalog {
        let daggers: VariantSet = [
            ("Dagger", vec![VariantEntry::new(0.5, 4.0, 0.5)]),
            (
                "Falchion Knife",
                vec![VariantEntry::new(0.25, 5.0, 0.4), VariantEntry::new(0.1, 6.0, 0.4)],
            ),
        ]
        .into_iter()
        .collect();
        let katanas: VariantSet = [("Uchigatana", vec![VariantEntry::new(0.75, 8.0, 0.8)])]
            .into_iter()
            .collect();
        VariantCatalog::new()
            .with_category("Daggers", daggers)
            .with_category("Katanas", katanas)
    }

    #[test]
    fn effective_multiplier_defaults() {
        assert_eq!(effective_multiplier(1.6), 1.6);
        assert_eq!(effective_multiplier(0.0), 1.0);
        assert_eq!(effective_multiplier(-2.0), 1.0);
        assert_eq!(effective_multiplier(f64::NAN), 1.0);
        assert_eq!(effective_multiplier(f64::INFINITY), 1.0);
    }

    #[test]
    fn damage_and_dps() {
        let group = project_variants("Katana", 1.5, &catalog(), 64).unwrap();
        let v = &group.variants[0];
        assert_eq!(v.name, "Uchigatana");
        assert_eq!(v.fraction.to_string(), "3/4");
        assert!((v.scaled_damage - 24.0).abs() < 1e-12);
        assert!((v.dps - 30.0).abs() < 1e-12);
    }

    #[test]
    fn every_entry_becomes_a_row_in_order() {
        let group = project_variants("Dagger", 0.0, &catalog(), 64).unwrap();
        assert_eq!(group.category, "Daggers");
        let rows: Vec<_> = group
            .variants
            .iter()
            .map(|v| (v.name.as_str(), v.fraction.to_string()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Dagger", "1/2".to_string()),
                ("Falchion Knife", "1/4".to_string()),
                ("Falchion Knife", "1/10".to_string()),
            ]
        );
        // Multiplier 0 falls back to 1.
        assert!((group.variants[0].scaled_damage - 8.0).abs() < 1e-12);
        assert!((group.variants[0].dps - 16.0).abs() < 1e-12);
    }

    #[test]
    fn outcomes_without_category_are_skipped() {
        assert!(project_variants("Light Helmet", 1.0, &catalog(), 64).is_none());
        assert!(project_variants("Great Axe", 1.0, &catalog(), 64).is_none());
    }

    #[test]
    fn groups_follow_odds_order() {
        let odds: OrderedMap<f64> = [("Katana", 0.6), ("Great Axe", 0.3), ("Dagger", 0.1)]
            .into_iter()
            .collect();
        let groups = project_outcomes(&odds, 1.0, &catalog(), 64);
        let outcomes: Vec<_> = groups.iter().map(|g| g.outcome.as_str()).collect();
        assert_eq!(outcomes, vec!["Katana", "Dagger"]);
    }

    #[test]
    fn display_row() {
        let group = project_variants("Katana", 1.0, &catalog(), 64).unwrap();
        assert_eq!(
            group.variants[0].to_string(),
            "Uchigatana (3/4): 16.00 dmg / 0.8s = 20.00 dps"
        );
    }
}
