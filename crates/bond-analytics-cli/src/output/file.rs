use serde_json::Value;
use std::fs;
use tracing::info;

use crate::input::file::resolve_path;

/// Write `value` as a single compact JSON document, creating parent
/// directories as needed.
pub fn write_json(path: &str, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let target = resolve_path(path)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    let text = serde_json::to_string(value)?;
    fs::write(&target, text)
        .map_err(|e| format!("Failed to write '{}': {}", target.display(), e))?;
    info!("Wrote {}", target.display());
    Ok(())
}
