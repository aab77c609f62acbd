//! Assembling a full crafting result.

use forge_core::{CraftType, OreCatalog, OrderedMap, ReferenceData};
use serde::Serialize;

use crate::composition::compose;
use crate::config::EngineConfig;
use crate::odds::resolve_odds;
use crate::selection::IngredientSelection;
use crate::transfer::{TraitGroup, resolve_traits};
use crate::variant::{VariantGroup, project_outcomes};

/// Rarity reported when the dominant ore is unknown or unrated.
pub const UNKNOWN_RARITY: &str = "Unknown";

/// Everything the forge predicts for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftResult {
    /// The craft type this result was computed for.
    pub craft_type: CraftType,
    /// Raw total ore quantity.
    pub total_count: f64,
    /// Ore name → share of the total, in percent.
    pub composition: OrderedMap<f64>,
    /// Transferred trait lines per ore, or a single placeholder group.
    pub traits: Vec<TraitGroup>,
    /// Quantity-weighted multiplier of the known ores.
    pub combined_multiplier: f64,
    /// Outcome name → probability, highest first.
    pub odds: OrderedMap<f64>,
    /// Rarity of the dominant ore.
    pub rarity: String,
    /// Weapon variant projections per outcome. Empty for armor.
    pub variants: Vec<VariantGroup>,
}

impl CraftResult {
    /// Returns true if at least one ore transferred a trait.
    pub fn has_traits(&self) -> bool {
        self.traits.iter().any(|g| !g.is_placeholder())
    }
}

/// The outcome of asking the forge for a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CraftOutcome {
    /// Too few ores to forge anything. This is a normal state, not an error.
    InsufficientInput {
        /// The raw total that was supplied.
        total: f64,
    },
    /// A full prediction.
    Crafted(CraftResult),
}

impl CraftOutcome {
    /// The result, if there was enough input.
    pub fn result(&self) -> Option<&CraftResult> {
        match self {
            Self::Crafted(result) => Some(result),
            Self::InsufficientInput { .. } => None,
        }
    }

    /// Consume the outcome, returning the result if there was enough input.
    pub fn into_result(self) -> Option<CraftResult> {
        match self {
            Self::Crafted(result) => Some(result),
            Self::InsufficientInput { .. } => None,
        }
    }

    /// Returns true for the insufficient-input state.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientInput { .. })
    }
}

/// The ore with the strictly highest share. The first ore wins ties.
pub fn dominant_ingredient(composition: &OrderedMap<f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (name, &pct) in composition.iter() {
        let current_best = best.map_or(0.0, |(_, p)| p);
        if pct > current_best {
            best = Some((name, pct));
        }
    }
    best.map(|(name, _)| name)
}

/// Rarity label of the dominant ore, or [`UNKNOWN_RARITY`].
pub fn dominant_rarity(composition: &OrderedMap<f64>, catalog: &OreCatalog) -> String {
    dominant_ingredient(composition)
        .and_then(|name| catalog.get(name))
        .map(|ore| ore.rarity.as_str())
        .filter(|rarity| !rarity.is_empty())
        .unwrap_or(UNKNOWN_RARITY)
        .to_string()
}

/// Predict the result of forging a selection of ores.
///
/// Returns [`CraftOutcome::InsufficientInput`] when the raw total is below
/// the configured minimum. Otherwise every part of the result is computed;
/// missing table data degrades to empty sections rather than failing.
pub fn compute_craft_result(
    selection: &IngredientSelection,
    craft: CraftType,
    reference: &ReferenceData,
    config: &EngineConfig,
) -> CraftOutcome {
    let total = selection.total();
    if total < config.min_ingredients {
        tracing::debug!(total, min = config.min_ingredients, "not enough ore to forge");
        return CraftOutcome::InsufficientInput { total };
    }

    let composition = compose(selection, &reference.ores);
    let traits = resolve_traits(
        &composition.percentages,
        &reference.ores,
        craft,
        config.trait_threshold_percent,
    );
    let odds = resolve_odds(
        reference.odds.for_craft(craft),
        composition.total_count,
        config.max_odds_count,
    );
    let variants = match craft {
        CraftType::Weapon => project_outcomes(
            &odds,
            composition.combined_multiplier,
            &reference.variants,
            config.fraction_denominator_cap,
        ),
        CraftType::Armor => Vec::new(),
    };
    let rarity = dominant_rarity(&composition.percentages, &reference.ores);

    tracing::debug!(
        craft = %craft,
        total,
        multiplier = composition.combined_multiplier,
        outcomes = odds.len(),
        %rarity,
        "computed craft result"
    );

    CraftOutcome::Crafted(CraftResult {
        craft_type: craft,
        total_count: composition.total_count,
        composition: composition.percentages,
        traits,
        combined_multiplier: composition.combined_multiplier,
        odds,
        rarity,
        variants,
    })
}
