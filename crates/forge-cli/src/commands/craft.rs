use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use forge_core::{CraftType, ReferenceData};
use forge_engine::{
    CraftOutcome, CraftResult, EngineConfig, IngredientSelection, compute_craft_result,
    dominant_ingredient,
};

use super::percent;

pub fn run(
    dir: &Path,
    ores: &[String],
    craft: CraftType,
    json: bool,
    min: f64,
    threshold: f64,
) -> Result<(), String> {
    let data = super::load_reference(dir)?;
    let mut selection = parse_selection(ores)?;

    for name in selection.retain_known(&data.ores) {
        tracing::warn!("unknown ore '{name}' ignored");
    }

    let config = EngineConfig::default()
        .with_min_ingredients(min)
        .with_trait_threshold(threshold);
    let outcome = compute_craft_result(&selection, craft, &data, &config);

    if json {
        let out = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    match outcome {
        CraftOutcome::InsufficientInput { .. } => print_empty_state(craft),
        CraftOutcome::Crafted(result) => print_result(&result, &data),
    }
    Ok(())
}

/// Parse `NAME=QUANTITY` arguments. Ore names may themselves contain `=`;
/// the quantity follows the last one.
fn parse_selection(args: &[String]) -> Result<IngredientSelection, String> {
    let mut selection = IngredientSelection::new();
    for arg in args {
        let (name, qty) = arg
            .rsplit_once('=')
            .ok_or_else(|| format!("expected NAME=QUANTITY, got '{arg}'"))?;
        let qty: f64 = qty
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity in '{arg}'"))?;
        if !selection.add(name, qty) {
            tracing::warn!("skipping '{arg}': needs a name and a positive quantity");
        }
    }
    Ok(selection)
}

fn print_empty_state(craft: CraftType) {
    println!("  {} {}", craft.label().bold(), "—".dimmed());
    println!("  Mult: ×0.00");
    println!();
    println!("  {}", "Enter ores to show composition".dimmed());
    println!("  {}", "Traits will appear here when eligible".dimmed());
    println!(
        "  {}",
        format!("Odds for {} will appear here when eligible", craft.label()).dimmed()
    );
}

fn print_result(result: &CraftResult, data: &ReferenceData) {
    let rarity_color = dominant_ingredient(&result.composition)
        .and_then(|name| data.ores.get(name))
        .and_then(|ore| ore.rgb());
    let rarity = match rarity_color {
        Some((r, g, b)) => result.rarity.truecolor(r, g, b).bold(),
        None => result.rarity.bold(),
    };
    println!("  {} {}", result.craft_type.label().bold(), rarity);
    println!("  Mult: ×{:.2}", result.combined_multiplier);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ore", "Share"]);
    for (name, pct) in result.composition.iter() {
        table.add_row(vec![name.to_string(), format!("{pct:.1}%")]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Traits".bold().underline());
    if result.has_traits() {
        for group in &result.traits {
            println!("  {}", group.ore.bold());
            for line in &group.lines {
                println!("    {line}");
            }
        }
    } else {
        println!("  {}", "(none)".dimmed());
    }
    println!();

    println!("  {}", "Odds".bold().underline());
    if result.odds.is_empty() {
        println!("  {}", "No odds data".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Outcome", "Chance"]);
        for (outcome, p) in result.odds.iter() {
            table.add_row(vec![outcome.to_string(), percent(*p)]);
        }
        println!("{table}");
    }

    for group in &result.variants {
        println!();
        println!(
            "  {} {}",
            group.outcome.bold().underline(),
            format!("({})", group.category).dimmed()
        );
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Variant", "Chance", "Damage", "Cycle", "DPS"]);
        for v in &group.variants {
            table.add_row(vec![
                v.name.clone(),
                v.fraction.to_string(),
                format!("{:.2}", v.scaled_damage),
                format!("{}s", v.attack_cycle_time),
                format!("{:.2}", v.dps),
            ]);
        }
        println!("{table}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_name_and_quantity() {
        let sel = parse_selection(&args(&["Iron=3", " Lapis Lazuli = 2.5", "Iron=1"])).unwrap();
        assert_eq!(sel.quantity("Iron"), Some(4.0));
        assert_eq!(sel.quantity("Lapis Lazuli"), Some(2.5));
    }

    #[test]
    fn skips_non_positive_quantities() {
        let sel = parse_selection(&args(&["Iron=0", "Gold=-2", "=4"])).unwrap();
        assert!(sel.is_empty());
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_selection(&args(&["Iron"])).is_err());
        assert!(parse_selection(&args(&["Iron=lots"])).is_err());
    }
}
