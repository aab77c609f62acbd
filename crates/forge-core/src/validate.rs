//! Load-time validation of reference tables.
//!
//! The engine trusts its tables: a zero attack cycle time or a negative
//! multiplier simply produces nonsense numbers. Loaders run
//! [`validate_reference`] once after loading to catch such data before it
//! reaches a computation.

use crate::odds::OddsTable;
use crate::reference::ReferenceData;
use crate::variant::{VariantCatalog, WEAPON_CATEGORIES};

/// A warning or error found in the reference tables.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Which table the issue is in (e.g. "ores", "weapon odds").
    pub table: String,
    /// The entry the issue refers to.
    pub entry: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(table: &str, entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.to_string(),
            entry: entry.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(table: &str, entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_error: false,
            ..Self::error(table, entry, message)
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {} '{}': {}", self.table, self.entry, self.message)
    }
}

/// Validate every reference table. Returns all issues found.
pub fn validate_reference(data: &ReferenceData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if data.ores.is_empty() {
        issues.push(ValidationIssue::error("ores", "*", "catalog is empty"));
    }
    validate_ores(data, &mut issues);
    validate_odds("weapon odds", &data.odds.weapon, &mut issues);
    validate_odds("armor odds", &data.odds.armor, &mut issues);
    validate_variants(&data.variants, &mut issues);

    issues
}

fn validate_ores(data: &ReferenceData, issues: &mut Vec<ValidationIssue>) {
    for ore in data.ores.iter() {
        if !ore.multiplier.is_finite() || ore.multiplier <= 0.0 {
            issues.push(ValidationIssue::error(
                "ores",
                &ore.name,
                format!("multiplier must be positive, got {}", ore.multiplier),
            ));
        }
        if ore.rarity.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                "ores",
                &ore.name,
                "no rarity label; results will show \"Unknown\"",
            ));
        }
        if !ore.traits.is_empty() && ore.trait_type.is_none() {
            issues.push(ValidationIssue::warning(
                "ores",
                &ore.name,
                "has traits but no traitType; they will never transfer",
            ));
        }
        for t in &ore.traits {
            if let Some(stat) = t.max_stat {
                if !stat.is_finite() || stat < 0.0 {
                    issues.push(ValidationIssue::warning(
                        "ores",
                        &ore.name,
                        format!("trait '{}' has maxStat {stat}", t.description),
                    ));
                }
            }
        }
    }
}

fn validate_odds(table_name: &str, table: &OddsTable, issues: &mut Vec<ValidationIssue>) {
    if table.is_empty() {
        issues.push(ValidationIssue::error(table_name, "*", "table has no rows"));
        return;
    }
    for (count, row) in table.rows() {
        for (outcome, probability) in row.iter() {
            if !probability.is_finite() || !(0.0..=1.0).contains(probability) {
                issues.push(ValidationIssue::error(
                    table_name,
                    format!("{count}/{outcome}"),
                    format!("probability must be within [0, 1], got {probability}"),
                ));
            }
        }
        if row.values().all(|p| *p <= 0.0) {
            issues.push(ValidationIssue::warning(
                table_name,
                count.to_string(),
                "row has no outcome with positive probability",
            ));
        }
    }
}

fn validate_variants(catalog: &VariantCatalog, issues: &mut Vec<ValidationIssue>) {
    for (category, set) in catalog.categories() {
        if !WEAPON_CATEGORIES.iter().any(|(_, c)| *c == category) {
            issues.push(ValidationIssue::warning(
                "weapon variants",
                category,
                "category is not reachable from any weapon outcome",
            ));
        }
        for (variant, entries) in set.iter() {
            let entry_name = format!("{category}/{variant}");
            if entries.is_empty() {
                issues.push(ValidationIssue::warning(
                    "weapon variants",
                    &entry_name,
                    "variant has no entries",
                ));
            }
            for entry in entries {
                if !(entry.chance > 0.0 && entry.chance <= 1.0) {
                    issues.push(ValidationIssue::error(
                        "weapon variants",
                        &entry_name,
                        format!("chance must be within (0, 1], got {}", entry.chance),
                    ));
                }
                if !entry.attack_cycle_time.is_finite() || entry.attack_cycle_time <= 0.0 {
                    issues.push(ValidationIssue::error(
                        "weapon variants",
                        &entry_name,
                        format!(
                            "attackCycleTime must be positive, got {}",
                            entry.attack_cycle_time
                        ),
                    ));
                }
                if !entry.base_damage.is_finite() || entry.base_damage < 0.0 {
                    issues.push(ValidationIssue::error(
                        "weapon variants",
                        &entry_name,
                        format!("baseDamage must not be negative, got {}", entry.base_damage),
                    ));
                }
            }
        }
    }
}
