//! Reference data for Oreforge: the ore catalog, outcome odds tables, and
//! weapon variants.
//!
//! This crate owns the data model the crafting engine reads. Tables are loaded
//! once (usually from a directory of JSON files via
//! [`ReferenceData::load_dir`]) and never mutated afterwards.

/// Craft types and trait applicability.
pub mod craft;
/// Error types used throughout the crate.
pub mod error;
/// Outcome odds tables per craft type.
pub mod odds;
/// Ores and their traits.
pub mod ore;
/// Insertion-ordered map used by every table.
pub mod ordered;
/// The reference data context and its loader.
pub mod reference;
/// Load-time validation of reference tables.
pub mod validate;
/// Weapon variant catalog and the outcome → category table.
pub mod variant;

/// Re-export craft types.
pub use craft::{CraftType, TraitType};
/// Re-export error types.
pub use error::{DataError, DataResult};
/// Re-export odds types.
pub use odds::{OddsRow, OddsTable, OddsTables};
/// Re-export ore types.
pub use ore::{Ore, OreCatalog, Trait};
/// Re-export the ordered map.
pub use ordered::OrderedMap;
/// Re-export the reference data context.
pub use reference::ReferenceData;
/// Re-export validation.
pub use validate::{ValidationIssue, validate_reference};
/// Re-export variant types.
pub use variant::{VariantCatalog, VariantEntry, VariantSet, weapon_category};
