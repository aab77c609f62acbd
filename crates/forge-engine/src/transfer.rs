//! Trait transfer: which ore traits carry over into the forged item, and how
//! strongly.
//!
//! An ore's traits transfer once its composition share reaches the
//! eligibility threshold. The transferred magnitude follows a clamped linear
//! ramp: nothing at or below ~7.78%, full strength from 30% upward.
//!
//! Some traits are written across two rows of the catalog ("Bonus Damage
//! with" followed by "Critical Hits"). A row whose text ends in one of the
//! connectives absorbs the next numeric row into the same display line.

use std::iter::Peekable;
use std::slice;

use forge_core::{CraftType, Ore, OreCatalog, OrderedMap, Trait};
use serde::{Deserialize, Serialize};

/// Trailing words that make a trait line continue into the next one.
pub const MERGE_CONNECTIVES: &[&str] = &["with", "of", "for", "per", "to", "in"];

/// Fraction of an ore's max stat that transfers at a composition share.
pub fn transferred_fraction(percent: f64) -> f64 {
    ((4.5 * percent - 35.0) / 100.0).clamp(0.0, 1.0)
}

/// Returns true if the trimmed description ends in a merge connective
/// (ASCII case-insensitive). The match is a plain suffix, so "within" and
/// "Drain" continue too.
pub fn continues_into_next(description: &str) -> bool {
    let text = description.trim().as_bytes();
    MERGE_CONNECTIVES.iter().any(|word| {
        text.len() >= word.len()
            && text[text.len() - word.len()..].eq_ignore_ascii_case(word.as_bytes())
    })
}

fn render_line(fraction: f64, max_stat: f64, description: &str) -> String {
    format!("{:.2}% {description}", fraction * max_stat)
}

/// The transferred trait lines of one ore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitGroup {
    /// Ore name. Empty for the placeholder group.
    pub ore: String,
    /// Display lines, in trait order.
    pub lines: Vec<String>,
}

impl TraitGroup {
    /// The group returned when no ore transfers anything.
    pub fn placeholder() -> Self {
        Self {
            ore: String::new(),
            lines: Vec::new(),
        }
    }

    /// Returns true for the empty-state placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.ore.is_empty() && self.lines.is_empty()
    }
}

/// Iterator over the display lines of a trait sequence.
///
/// Flavor-only traits are skipped. A numeric trait whose text ends in a
/// connective takes the next trait along when that one is numeric too; at most
/// two traits share a line.
pub struct TraitLines<'a> {
    traits: Peekable<slice::Iter<'a, Trait>>,
    fraction: f64,
}

impl<'a> TraitLines<'a> {
    /// Render `traits` at the given transferred fraction.
    pub fn new(traits: &'a [Trait], fraction: f64) -> Self {
        Self {
            traits: traits.iter().peekable(),
            fraction,
        }
    }
}

impl Iterator for TraitLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let current = self.traits.next()?;
            let Some(stat) = current.max_stat else {
                continue;
            };
            let mut line = render_line(self.fraction, stat, &current.description);

            if continues_into_next(&current.description) {
                if let Some(next) = self.traits.next_if(|t| t.max_stat.is_some()) {
                    let next_stat = next.max_stat.unwrap_or_default();
                    line.push(' ');
                    line.push_str(&render_line(self.fraction, next_stat, &next.description));
                }
            }
            return Some(line);
        }
    }
}

/// Returns true if an ore's traits may transfer into this craft.
pub fn is_eligible(ore: &Ore, craft: CraftType, percent: f64, threshold_percent: f64) -> bool {
    !ore.traits.is_empty()
        && ore
            .trait_type
            .as_ref()
            .is_some_and(|kind| kind.applies_to(craft))
        && percent >= threshold_percent
}

/// Resolve transferred traits for every ore in a composition.
///
/// Returns one group per ore that produced at least one line, in composition
/// order. When nothing transfers, returns a single [`TraitGroup::placeholder`].
pub fn resolve_traits(
    percentages: &OrderedMap<f64>,
    catalog: &OreCatalog,
    craft: CraftType,
    threshold_percent: f64,
) -> Vec<TraitGroup> {
    let mut groups = Vec::new();

    for (name, &percent) in percentages.iter() {
        let Some(ore) = catalog.get(name) else {
            continue;
        };
        if !is_eligible(ore, craft, percent, threshold_percent) {
            continue;
        }

        let fraction = transferred_fraction(percent);
        let lines: Vec<String> = TraitLines::new(&ore.traits, fraction).collect();
        if lines.is_empty() {
            tracing::debug!(ore = name, "eligible but every trait is flavor-only");
            continue;
        }
        groups.push(TraitGroup {
            ore: name.to_string(),
            lines,
        });
    }

    if groups.is_empty() {
        groups.push(TraitGroup::placeholder());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::TraitType;

    fn lines(traits: &[Trait], fraction: f64) -> Vec<String> {
        TraitLines::new(traits, fraction).collect()
    }

    #[test]
    fn fraction_ramp_boundaries() {
        assert_eq!(transferred_fraction(0.0), 0.0);
        assert_eq!(transferred_fraction(7.7), 0.0);
        assert_eq!(transferred_fraction(30.0), 1.0);
        assert_eq!(transferred_fraction(100.0), 1.0);
        assert!((transferred_fraction(20.0) - 0.55).abs() < 1e-12);
        assert!((transferred_fraction(10.0) - 0.10).abs() < 1e-12);
    }

    #[test]
    fn connective_detection() {
        assert!(continues_into_next("Bonus Damage with"));
        assert!(continues_into_next("Chance PER  "));
        assert!(continues_into_next("to"));
        assert!(continues_into_next("Damage within"));
        assert!(continues_into_next("Life Drain"));
        assert!(continues_into_next("Proof"));
        assert!(!continues_into_next("Fire Damage"));
        assert!(!continues_into_next("Heal"));
        assert!(!continues_into_next("n"));
        assert!(!continues_into_next("Éclat brûlé"));
        assert!(!continues_into_next(""));
    }

    #[test]
    fn single_stat_at_full_transfer() {
        let traits = [Trait::stat("Increased Fire Damage", 20.0)];
        assert_eq!(lines(&traits, transferred_fraction(100.0)), vec!["20.00% Increased Fire Damage"]);
    }

    #[test]
    fn flavor_traits_never_render() {
        let traits = [Trait::flavor("Smells of sulfur"), Trait::flavor("Warm")];
        assert!(lines(&traits, 1.0).is_empty());
    }

    #[test]
    fn merge_requires_numeric_successor() {
        let traits = [
            Trait::stat("Damage to", 10.0),
            Trait::flavor("Undead"),
            Trait::stat("Lifesteal", 4.0),
        ];
        assert_eq!(lines(&traits, 1.0), vec!["10.00% Damage to", "4.00% Lifesteal"]);
    }

    #[test]
    fn suffix_connective_merges_successor() {
        let traits = [Trait::stat("Life Drain", 5.0), Trait::stat("Heal", 2.0)];
        assert_eq!(lines(&traits, 1.0), vec!["5.00% Life Drain 2.00% Heal"]);
    }

    #[test]
    fn merge_is_not_recursive() {
        let traits = [
            Trait::stat("Bonus with", 1.0),
            Trait::stat("Fire to", 2.0),
            Trait::stat("Enemies", 3.0),
        ];
        assert_eq!(
            lines(&traits, 1.0),
            vec!["1.00% Bonus with 2.00% Fire to", "3.00% Enemies"]
        );
    }

    #[test]
    fn connective_at_end_of_list() {
        let traits = [Trait::stat("Damage per", 6.0)];
        assert_eq!(lines(&traits, 0.5), vec!["3.00% Damage per"]);
    }

    #[test]
    fn mixed_sequence_snapshot() {
        let traits = [
            Trait::stat("Bonus Damage with", 15.0),
            Trait::stat("Critical Hits", 5.0),
            Trait::flavor("Glows faintly"),
            Trait::stat("Attack Speed", 8.0),
            Trait::stat("Damage to", 10.0),
            Trait::flavor("Undead"),
            Trait::stat("Lifesteal", 4.0),
        ];
        let text = lines(&traits, transferred_fraction(20.0)).join("\n");
        insta::assert_snapshot!(text, @r"
        8.25% Bonus Damage with 2.75% Critical Hits
        4.40% Attack Speed
        5.50% Damage to
        2.20% Lifesteal
        ");
    }

    fn catalog() -> OreCatalog {
        OreCatalog::new()
            .with(Ore::new("Magma", 1.5, "Epic").with_traits(
                TraitType::Only(CraftType::Weapon),
                vec![Trait::stat("Increased Fire Damage", 20.0)],
            ))
            .with(Ore::new("Obsidian", 2.35, "Legendary").with_traits(
                TraitType::Only(CraftType::Armor),
                vec![Trait::stat("Damage Reduction", 15.0)],
            ))
            .with(Ore::new("Eye", 4.0, "Legendary").with_traits(
                TraitType::All,
                vec![Trait::stat("Critical Chance", 10.0), Trait::flavor("Watches")],
            ))
            .with(Ore::new("Moss", 0.4, "Common").with_traits(
                TraitType::All,
                vec![Trait::flavor("Soft")],
            ))
            .with(Ore::new("Iron", 0.35, "Common"))
    }

    fn percentages(pairs: &[(&str, f64)]) -> OrderedMap<f64> {
        pairs.iter().map(|(n, p)| (*n, *p)).collect()
    }

    #[test]
    fn resolves_groups_in_composition_order() {
        let pct = percentages(&[("Eye", 50.0), ("Magma", 50.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].ore, "Eye");
        assert_eq!(groups[0].lines, vec!["10.00% Critical Chance"]);
        assert_eq!(groups[1].ore, "Magma");
        assert_eq!(groups[1].lines, vec!["20.00% Increased Fire Damage"]);
    }

    #[test]
    fn craft_type_filters_groups() {
        let pct = percentages(&[("Magma", 50.0), ("Obsidian", 50.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Armor, 10.0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].ore, "Obsidian");
    }

    #[test]
    fn below_threshold_is_skipped() {
        let pct = percentages(&[("Iron", 91.0), ("Magma", 9.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert_eq!(groups, vec![TraitGroup::placeholder()]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let pct = percentages(&[("Iron", 90.0), ("Magma", 10.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert_eq!(groups[0].lines, vec!["2.00% Increased Fire Damage"]);
    }

    #[test]
    fn flavor_only_ore_is_omitted() {
        let pct = percentages(&[("Moss", 100.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_placeholder());
    }

    #[test]
    fn unknown_ore_contributes_nothing() {
        let pct = percentages(&[("Mystery", 100.0)]);
        let groups = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert!(groups[0].is_placeholder());
    }

    #[test]
    fn resolution_is_repeatable() {
        let pct = percentages(&[("Eye", 40.0), ("Magma", 35.0), ("Iron", 25.0)]);
        let first = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        let second = resolve_traits(&pct, &catalog(), CraftType::Weapon, 10.0);
        assert_eq!(first, second);
    }
}
