use std::path::Path;

use colored::Colorize;
use forge_core::{ReferenceData, validate_reference};

pub fn run(dir: &Path) -> Result<(), String> {
    let data = ReferenceData::load_dir(dir).map_err(|e| e.to_string())?;
    let issues = validate_reference(&data);

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    println!(
        "  {} ores, {} weapon odds rows, {} armor odds rows, {} variant categories",
        data.ores.len(),
        data.odds.weapon.len(),
        data.odds.armor.len(),
        data.variants.len()
    );

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    if warnings > 0 {
        println!(
            "  All checks passed for '{}' with {} warning{}.",
            dir.display(),
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    } else {
        println!("  All checks passed for '{}'.", dir.display());
    }

    Ok(())
}
