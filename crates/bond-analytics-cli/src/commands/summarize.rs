use clap::Args;
use serde_json::Value;
use tracing::info;

use bond_analytics_core::fixed_income::loader::BondRecord;
use bond_analytics_core::portfolio::summary;

use crate::input;

/// Arguments for re-summarizing enriched records
#[derive(Args)]
pub struct SummarizeArgs {
    /// Path to a JSON array of records, or a {bonds, summary} report
    #[arg(long)]
    pub input: Option<String>,

    /// Write the JSON summary here instead of printing it
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run_summarize(args: SummarizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for summarize".into());
    };

    let records = records_from(data)?;
    info!("Summarizing {} bonds", records.len());
    Ok(serde_json::to_value(summary::summarize(&records))?)
}

/// Accept either a bare record array or a report carrying a `bonds` field.
fn records_from(data: Value) -> Result<Vec<BondRecord>, Box<dyn std::error::Error>> {
    let bonds = match data {
        Value::Object(mut map) => map
            .remove("bonds")
            .ok_or("expected a JSON array of bonds or an object with a 'bonds' field")?,
        other => other,
    };
    Ok(serde_json::from_value(bonds)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_from_bare_array() {
        let data = json!([{"isin": "A", "ytm": 4.5, "years_to_maturity": 2.0, "bucket": "1-3y"}]);
        let records = records_from(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].isin, "A");
        assert!(records[0].ytm.is_some());
    }

    #[test]
    fn test_records_from_report() {
        let data = json!({"bonds": [{"isin": "A"}, {"isin": "B"}], "summary": {}});
        assert_eq!(records_from(data).unwrap().len(), 2);
    }

    #[test]
    fn test_object_without_bonds_rejected() {
        assert!(records_from(json!({"summary": {}})).is_err());
    }
}
