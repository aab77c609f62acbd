//! Tunable thresholds for the crafting engine.

/// Smallest total ore quantity the forge accepts.
pub const MIN_INGREDIENTS: f64 = 3.0;
/// Largest ingredient count with its own odds row; larger totals use this row.
pub const MAX_ODDS_COUNT: u32 = 55;
/// Minimum composition share (percent) for an ore's traits to transfer.
pub const TRAIT_THRESHOLD_PERCENT: f64 = 10.0;
/// Largest denominator tried when approximating a drop chance.
pub const FRACTION_DENOMINATOR_CAP: u64 = 64;

/// Configuration for a crafting computation.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Totals below this return insufficient input.
    pub min_ingredients: f64,
    /// Totals above this are clamped before the odds lookup.
    pub max_odds_count: u32,
    /// Composition share (percent) an ore needs for its traits to transfer.
    pub trait_threshold_percent: f64,
    /// Denominator cap for the best-rational fallback.
    pub fraction_denominator_cap: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_ingredients: MIN_INGREDIENTS,
            max_odds_count: MAX_ODDS_COUNT,
            trait_threshold_percent: TRAIT_THRESHOLD_PERCENT,
            fraction_denominator_cap: FRACTION_DENOMINATOR_CAP,
        }
    }
}

impl EngineConfig {
    /// Set the minimum total ore quantity.
    pub fn with_min_ingredients(mut self, min: f64) -> Self {
        self.min_ingredients = min;
        self
    }

    /// Set the largest ingredient count used for odds lookups.
    pub fn with_max_odds_count(mut self, max: u32) -> Self {
        self.max_odds_count = max;
        self
    }

    /// Set the trait transfer eligibility threshold (percent).
    pub fn with_trait_threshold(mut self, percent: f64) -> Self {
        self.trait_threshold_percent = percent;
        self
    }

    /// Set the denominator cap for fraction approximation (at least 1).
    pub fn with_fraction_cap(mut self, cap: u64) -> Self {
        self.fraction_denominator_cap = cap.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert!((cfg.min_ingredients - 3.0).abs() < f64::EPSILON);
        assert_eq!(cfg.max_odds_count, 55);
        assert!((cfg.trait_threshold_percent - 10.0).abs() < f64::EPSILON);
        assert_eq!(cfg.fraction_denominator_cap, 64);
    }

    #[test]
    fn builder_chain() {
        let cfg = EngineConfig::default()
            .with_min_ingredients(5.0)
            .with_max_odds_count(40)
            .with_trait_threshold(15.0)
            .with_fraction_cap(128);
        assert!((cfg.min_ingredients - 5.0).abs() < f64::EPSILON);
        assert_eq!(cfg.max_odds_count, 40);
        assert!((cfg.trait_threshold_percent - 15.0).abs() < f64::EPSILON);
        assert_eq!(cfg.fraction_denominator_cap, 128);
    }

    #[test]
    fn fraction_cap_clamped() {
        let cfg = EngineConfig::default().with_fraction_cap(0);
        assert_eq!(cfg.fraction_denominator_cap, 1);
    }
}
