use std::path::Path;

use comfy_table::{Cell, Color, ContentArrangement, Table};
use forge_core::Ore;

pub fn run(dir: &Path, filter: Option<&str>) -> Result<(), String> {
    let data = super::load_reference(dir)?;
    let ores = data.ores.by_multiplier(filter.unwrap_or_default());

    if ores.is_empty() {
        match filter {
            Some(f) => println!("  No ores match '{f}'."),
            None => println!("  No ores found."),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ore", "Rarity", "Mult", "Traits"]);

    for ore in &ores {
        let rarity = if ore.rarity.is_empty() {
            "—".to_string()
        } else {
            ore.rarity.clone()
        };
        let traits = if ore.traits.is_empty() {
            "—".to_string()
        } else {
            let kind = ore
                .trait_type
                .as_ref()
                .map(|k| format!("[{k}] "))
                .unwrap_or_default();
            let lines: Vec<String> = ore.traits.iter().map(|t| t.catalog_line()).collect();
            format!("{kind}{}", lines.join("\n"))
        };
        let mut name = Cell::new(&ore.name);
        if let Some(color) = name_color(ore) {
            name = name.fg(color);
        }
        table.add_row(vec![
            name,
            Cell::new(rarity),
            Cell::new(format!("×{:.2}", ore.multiplier)),
            Cell::new(traits),
        ]);
    }

    println!("{table}");
    println!();
    let noun = if ores.len() == 1 { "ore" } else { "ores" };
    println!("  {} {noun}", ores.len());

    Ok(())
}

/// The rarity color an ore's name is drawn in, if it has a valid one.
fn name_color(ore: &Ore) -> Option<Color> {
    ore.rgb().map(|(r, g, b)| Color::Rgb { r, g, b })
}
