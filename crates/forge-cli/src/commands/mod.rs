pub mod check;
pub mod craft;
pub mod fraction;
pub mod init;
pub mod odds;
pub mod ores;

use std::path::Path;

use forge_core::{ReferenceData, validate_reference};

/// Load a data directory, failing on validation errors.
///
/// Validation warnings are logged and do not stop the command.
fn load_reference(dir: &Path) -> Result<ReferenceData, String> {
    let data = ReferenceData::load_dir(dir).map_err(|e| e.to_string())?;

    let issues = validate_reference(&data);
    let errors = issues.iter().filter(|i| i.is_error).count();
    for issue in issues.iter().filter(|i| !i.is_error) {
        tracing::warn!("{issue}");
    }
    if errors > 0 {
        for issue in issues.iter().filter(|i| i.is_error) {
            eprintln!("  {issue}");
        }
        return Err(format!(
            "invalid data in '{}' ({} error{}); run `forge check` for details",
            dir.display(),
            errors,
            if errors == 1 { "" } else { "s" },
        ));
    }
    Ok(data)
}

/// Format a probability as a percentage with one decimal.
fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
