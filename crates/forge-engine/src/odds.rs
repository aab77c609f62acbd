//! Outcome odds for a given ingredient total.

use forge_core::{OddsRow, OddsTable, OrderedMap};

/// The ingredient total after clamping to the largest odds row.
pub fn effective_count(total: f64, max_odds_count: u32) -> f64 {
    total.min(f64::from(max_odds_count))
}

/// The table key for an effective count. Only whole, non-negative counts can
/// match a row.
fn row_key(count: f64) -> Option<u32> {
    if count >= 0.0 && count.fract() == 0.0 && count <= f64::from(u32::MAX) {
        Some(count as u32)
    } else {
        None
    }
}

/// Pick the odds row for a total: the exact row for the clamped count, or the
/// largest-count row when that is missing.
pub fn select_row(table: &OddsTable, total: f64, max_odds_count: u32) -> Option<&OddsRow> {
    let count = effective_count(total, max_odds_count);
    if let Some(row) = row_key(count).and_then(|key| table.row(key)) {
        return Some(row);
    }

    match table.max_row() {
        Some((fallback, row)) => {
            tracing::warn!(
                requested = count,
                fallback,
                "no odds row for ingredient count, using the largest row"
            );
            Some(row)
        }
        None => {
            tracing::warn!(requested = count, "odds table is empty");
            None
        }
    }
}

/// Resolve the ranked outcome odds for an ingredient total.
///
/// Outcomes with zero (or non-finite) probability are dropped. The rest are
/// sorted by descending probability; equal probabilities keep table order. An
/// empty table yields an empty map.
pub fn resolve_odds(table: &OddsTable, total: f64, max_odds_count: u32) -> OrderedMap<f64> {
    let Some(row) = select_row(table, total, max_odds_count) else {
        return OrderedMap::new();
    };

    let mut ranked: Vec<(&str, f64)> = row
        .iter()
        .filter(|(_, p)| p.is_finite() && **p > 0.0)
        .map(|(outcome, p)| (outcome, *p))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, f64)]) -> OddsRow {
        pairs.iter().map(|(n, p)| (*n, *p)).collect()
    }

    fn table() -> OddsTable {
        OddsTable::new()
            .with_row(3, row(&[("Dagger", 0.8), ("Gauntlet", 0.2), ("Katana", 0.0)]))
            .with_row(10, row(&[("Dagger", 0.3), ("Katana", 0.3), ("Great Sword", 0.4)]))
            .with_row(55, row(&[("Colossal Sword", 0.6), ("Great Axe", 0.4)]))
    }

    fn outcomes(odds: &OrderedMap<f64>) -> Vec<&str> {
        odds.keys().collect()
    }

    #[test]
    fn exact_row_sorted_descending() {
        let odds = resolve_odds(&table(), 3.0, 55);
        assert_eq!(outcomes(&odds), vec!["Dagger", "Gauntlet"]);
        assert_eq!(odds.get("Dagger"), Some(&0.8));
    }

    #[test]
    fn ties_keep_table_order() {
        let odds = resolve_odds(&table(), 10.0, 55);
        assert_eq!(outcomes(&odds), vec!["Great Sword", "Dagger", "Katana"]);
    }

    #[test]
    fn totals_above_max_are_clamped() {
        let clamped = resolve_odds(&table(), 80.0, 55);
        let at_max = resolve_odds(&table(), 55.0, 55);
        assert_eq!(clamped, at_max);
        assert_eq!(outcomes(&clamped), vec!["Colossal Sword", "Great Axe"]);
    }

    #[test]
    fn missing_row_falls_back_to_largest() {
        let odds = resolve_odds(&table(), 7.0, 55);
        assert_eq!(outcomes(&odds), vec!["Colossal Sword", "Great Axe"]);
    }

    #[test]
    fn fractional_total_falls_back_to_largest() {
        let odds = resolve_odds(&table(), 3.5, 55);
        assert_eq!(outcomes(&odds), vec!["Colossal Sword", "Great Axe"]);
    }

    #[test]
    fn fallback_uses_largest_key_below_clamp() {
        let sparse = OddsTable::new()
            .with_row(3, row(&[("Light Helmet", 1.0)]))
            .with_row(20, row(&[("Heavy Helmet", 0.25), ("Medium Helmet", 0.75)]));
        let odds = resolve_odds(&sparse, 12.0, 55);
        assert_eq!(outcomes(&odds), vec!["Medium Helmet", "Heavy Helmet"]);
    }

    #[test]
    fn empty_table_yields_empty_odds() {
        assert!(resolve_odds(&OddsTable::new(), 5.0, 55).is_empty());
    }

    #[test]
    fn effective_count_clamps() {
        assert_eq!(effective_count(70.0, 55), 55.0);
        assert_eq!(effective_count(12.5, 55), 12.5);
    }

    #[test]
    fn row_key_rejects_fractional_counts() {
        assert_eq!(row_key(12.0), Some(12));
        assert_eq!(row_key(12.5), None);
        assert_eq!(row_key(-1.0), None);
    }
}
