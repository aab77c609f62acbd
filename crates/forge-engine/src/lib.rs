//! Crafting outcome engine for Oreforge.
//!
//! Given a selection of ores and a craft type, predicts the composition,
//! the blended multiplier, the traits that transfer into the forged item,
//! the ranked outcome odds, the dominant rarity, and (for weapons) the
//! damage of each variant an outcome can drop as. Every computation is a
//! pure function of the selection and the loaded [`forge_core::ReferenceData`].

pub mod composition;
pub mod config;
pub mod fraction;
pub mod odds;
pub mod result;
pub mod selection;
pub mod transfer;
pub mod variant;

pub use composition::{Composition, combined_multiplier, compose, composition_percentages};
pub use config::EngineConfig;
pub use fraction::{Fraction, approximate_fraction, simplified_fraction};
pub use odds::{effective_count, resolve_odds, select_row};
pub use result::{
    CraftOutcome, CraftResult, UNKNOWN_RARITY, compute_craft_result, dominant_ingredient,
    dominant_rarity,
};
pub use selection::IngredientSelection;
pub use transfer::{TraitGroup, TraitLines, resolve_traits, transferred_fraction};
pub use variant::{VariantGroup, VariantProjection, project_outcomes, project_variants};
