use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use forge_core::CraftType;
use forge_engine::config::MAX_ODDS_COUNT;
use forge_engine::{effective_count, resolve_odds};

use super::percent;

pub fn run(dir: &Path, count: f64, craft: CraftType) -> Result<(), String> {
    if !count.is_finite() || count < 0.0 {
        return Err(format!("invalid ore count: {count}"));
    }
    let data = super::load_reference(dir)?;
    let odds = resolve_odds(data.odds.for_craft(craft), count, MAX_ODDS_COUNT);

    let effective = effective_count(count, MAX_ODDS_COUNT);
    if effective < count {
        println!(
            "  {} odds for {} ores {}",
            craft.label().bold(),
            count,
            format!("(capped at {effective})").dimmed()
        );
    } else {
        println!("  {} odds for {} ores", craft.label().bold(), count);
    }
    println!();

    if odds.is_empty() {
        println!("  No odds data");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Chance"]);
    for (outcome, p) in odds.iter() {
        table.add_row(vec![outcome.to_string(), percent(*p)]);
    }
    println!("{table}");

    Ok(())
}
