use serde_json::Value;
use std::io;

use super::{format_value, summary_of, BOND_COLUMNS};

/// Write output as CSV to stdout: one row per bond for a report, a
/// field/value listing for a bare summary.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(Value::Array(bonds)) = value.get("bonds") {
        write_bonds_csv(&mut wtr, bonds);
    } else if let Value::Object(summary) = summary_of(value) {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in summary {
            match val {
                Value::Object(ladder) => {
                    for (bucket, n) in ladder {
                        let _ = wtr.write_record([
                            format!("{key}.{bucket}"),
                            format_value(n, ""),
                        ]);
                    }
                }
                Value::Array(records) => {
                    let isins: Vec<String> = records
                        .iter()
                        .map(|r| format_value(&r["isin"], ""))
                        .collect();
                    let _ = wtr.write_record([key.as_str(), &isins.join(";")]);
                }
                _ => {
                    let _ = wtr.write_record([key.as_str(), &format_value(val, "")]);
                }
            }
        }
    }

    let _ = wtr.flush();
}

fn write_bonds_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, bonds: &[Value]) {
    let _ = wtr.write_record(BOND_COLUMNS);
    for bond in bonds {
        let row: Vec<String> = BOND_COLUMNS
            .iter()
            .map(|c| bond.get(*c).map(|v| format_value(v, "")).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}
