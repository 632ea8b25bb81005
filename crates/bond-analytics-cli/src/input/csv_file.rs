use std::fs::File;

use tracing::{info, warn};

use bond_analytics_core::fixed_income::fields::RawRow;

use crate::input::file::resolve_path;

/// Read a headed CSV into raw rows keyed by column name.
///
/// A missing file means no instruments and yields no rows. Rows with a
/// different field count than the header are accepted, and cells that are
/// not valid UTF-8 are decoded lossily so every row is kept.
pub fn read_rows(path: &str) -> Result<Vec<RawRow>, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    if !canonical.is_file() {
        warn!("{} not found; treating as no bonds", canonical.display());
        return Ok(Vec::new());
    }

    let file = File::open(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .byte_headers()
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut rows = Vec::new();
    for (index, record) in rdr.byte_records().enumerate() {
        let record = record
            .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
        if std::str::from_utf8(record.as_slice()).is_err() {
            // Header is line 1
            warn!(
                "line {} of {} is not valid UTF-8; invalid bytes replaced",
                index + 2,
                canonical.display()
            );
        }
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), String::from_utf8_lossy(v).into_owned()))
                .collect(),
        );
    }

    info!("Read {} rows from {}", rows.len(), canonical.display());
    Ok(rows)
}
