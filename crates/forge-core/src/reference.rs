//! The reference data context handed to every engine call.
//!
//! [`ReferenceData`] bundles the ore catalog, both odds tables, and the weapon
//! variant catalog. It is built once by whoever loads the tables and then only
//! ever read, so it can be shared freely between threads.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{DataError, DataResult};
use crate::odds::{OddsTable, OddsTables};
use crate::ore::OreCatalog;
use crate::variant::VariantCatalog;

/// File name of the ore catalog in a data directory.
pub const ORES_FILE: &str = "ores.json";
/// File name of the weapon odds table.
pub const WEAPON_ODDS_FILE: &str = "weaponOdds.json";
/// File name of the armor odds table.
pub const ARMOR_ODDS_FILE: &str = "armorOdds.json";
/// File name of the optional weapon variant catalog.
pub const VARIANTS_FILE: &str = "weaponVariants.json";

/// Immutable reference tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    /// All known ores.
    pub ores: OreCatalog,
    /// Outcome odds per craft type.
    pub odds: OddsTables,
    /// Weapon variants. Empty when no variant data was supplied.
    pub variants: VariantCatalog,
}

impl ReferenceData {
    /// Bundle already-built tables.
    pub fn new(ores: OreCatalog, odds: OddsTables, variants: VariantCatalog) -> Self {
        Self {
            ores,
            odds,
            variants,
        }
    }

    /// Parse the tables from JSON strings. `variants` may be omitted.
    pub fn from_json(
        ores: &str,
        weapon_odds: &str,
        armor_odds: &str,
        variants: Option<&str>,
    ) -> DataResult<Self> {
        let ores: OreCatalog = parse_table(ORES_FILE, ores)?;
        let weapon: OddsTable = parse_table(WEAPON_ODDS_FILE, weapon_odds)?;
        let armor: OddsTable = parse_table(ARMOR_ODDS_FILE, armor_odds)?;
        let variants = match variants {
            Some(json) => parse_table(VARIANTS_FILE, json)?,
            None => VariantCatalog::new(),
        };
        Ok(Self::new(ores, OddsTables::new(weapon, armor), variants))
    }

    /// Load all tables from a data directory.
    ///
    /// `weaponVariants.json` is optional; the other three files are required.
    pub fn load_dir(dir: &Path) -> DataResult<Self> {
        let ores = read_required(dir, ORES_FILE)?;
        let weapon = read_required(dir, WEAPON_ODDS_FILE)?;
        let armor = read_required(dir, ARMOR_ODDS_FILE)?;
        let variants = read_optional(dir, VARIANTS_FILE)?;
        if variants.is_none() {
            tracing::debug!(dir = %dir.display(), "no {VARIANTS_FILE}, weapon variants disabled");
        }

        let data = Self::from_json(&ores, &weapon, &armor, variants.as_deref())?;
        tracing::info!(
            ores = data.ores.len(),
            weapon_rows = data.odds.weapon.len(),
            armor_rows = data.odds.armor.len(),
            variant_categories = data.variants.len(),
            "loaded reference data from {}",
            dir.display()
        );
        Ok(data)
    }
}

fn parse_table<T: DeserializeOwned>(table: &str, json: &str) -> DataResult<T> {
    serde_json::from_str(json).map_err(|source| DataError::Json {
        table: table.to_string(),
        source,
    })
}

fn read_required(dir: &Path, file: &str) -> DataResult<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
}

fn read_optional(dir: &Path, file: &str) -> DataResult<Option<String>> {
    let path = dir.join(file);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DataError::Io { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ORES: &str = r#"{ "Iron": { "multiplier": 0.35, "rarity": "Common" } }"#;
    const WEAPON: &str = r#"{ "3": { "Dagger": 1.0 } }"#;
    const ARMOR: &str = r#"{ "3": { "Light Helmet": 1.0 } }"#;

    #[test]
    fn from_json_without_variants() {
        let data = ReferenceData::from_json(ORES, WEAPON, ARMOR, None).unwrap();
        assert_eq!(data.ores.len(), 1);
        assert_eq!(data.odds.weapon.len(), 1);
        assert!(data.variants.is_empty());
    }

    #[test]
    fn from_json_reports_failing_table() {
        let err = ReferenceData::from_json(ORES, "{ not json", ARMOR, None).unwrap_err();
        assert!(matches!(err, DataError::Json { ref table, .. } if table == WEAPON_ODDS_FILE));
        assert!(err.to_string().starts_with("invalid weaponOdds.json"));
    }

    #[test]
    fn load_dir_reads_all_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ORES_FILE), ORES).unwrap();
        fs::write(dir.path().join(WEAPON_ODDS_FILE), WEAPON).unwrap();
        fs::write(dir.path().join(ARMOR_ODDS_FILE), ARMOR).unwrap();
        fs::write(
            dir.path().join(VARIANTS_FILE),
            r#"{ "Daggers": { "Dagger": [{ "chance": 1, "baseDamage": 4, "attackCycleTime": 0.5 }] } }"#,
        )
        .unwrap();

        let data = ReferenceData::load_dir(dir.path()).unwrap();
        assert!(data.ores.contains("Iron"));
        assert_eq!(data.variants.len(), 1);
    }

    #[test]
    fn load_dir_missing_required_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ORES_FILE), ORES).unwrap();
        let err = ReferenceData::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains(WEAPON_ODDS_FILE));
    }

    #[test]
    fn reference_data_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceData>();
    }
}
