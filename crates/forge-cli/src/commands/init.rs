use std::fs;
use std::path::Path;

use forge_core::reference::{ARMOR_ODDS_FILE, ORES_FILE, VARIANTS_FILE, WEAPON_ODDS_FILE};

const SAMPLE_FILES: [(&str, &str); 4] = [
    (ORES_FILE, include_str!("../../data/ores.json")),
    (WEAPON_ODDS_FILE, include_str!("../../data/weaponOdds.json")),
    (ARMOR_ODDS_FILE, include_str!("../../data/armorOdds.json")),
    (VARIANTS_FILE, include_str!("../../data/weaponVariants.json")),
];

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    for (file, content) in SAMPLE_FILES {
        fs::write(dir.join(file), content).map_err(|e| format!("cannot write {file}: {e}"))?;
    }
    tracing::info!(dir = %dir.display(), "wrote sample data");

    println!("Created data directory {}/", dir.display());
    println!("  {ORES_FILE:<20} ore catalog");
    println!("  {WEAPON_ODDS_FILE:<20} weapon odds per ore count");
    println!("  {ARMOR_ODDS_FILE:<20} armor odds per ore count");
    println!("  {VARIANTS_FILE:<20} weapon variants");
    println!();
    println!("Get started:");
    println!("  cd {}", dir.display());
    println!("  forge ores                      # Browse the ore catalog");
    println!("  forge craft Iron=4 Cobalt=2     # Predict a weapon");
    println!("  forge craft --armor Obsidian=5  # Predict armor");

    Ok(())
}
