use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, summary_of, BOND_COLUMNS};

/// Next-maturity columns shown under the summary.
const NEXT_MATURITY_COLUMNS: [&str; 5] = ["isin", "issuer", "maturity", "years_to_maturity", "ytm"];

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(Value::Array(bonds)) = value.get("bonds") {
        if bonds.is_empty() {
            println!("(no bonds)");
        } else {
            println!("{}", records_table(bonds, &BOND_COLUMNS));
        }
        println!();
    }

    let summary = summary_of(value);
    let Value::Object(map) = summary else {
        println!("{}", summary);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if !val.is_object() && !val.is_array() {
            builder.push_record([key.as_str(), &format_value(val, "null")]);
        }
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Object(ladder)) = map.get("ladder") {
        let mut builder = Builder::default();
        builder.push_record(["Bucket", "Count"]);
        for (bucket, n) in ladder {
            builder.push_record([bucket.as_str(), &format_value(n, "0")]);
        }
        println!("\nMaturity ladder:\n{}", Table::from(builder));
    }

    if let Some(Value::Array(next)) = map.get("next_maturities") {
        if !next.is_empty() {
            println!(
                "\nNext maturities:\n{}",
                records_table(next, &NEXT_MATURITY_COLUMNS)
            );
        }
    }
}

fn records_table(records: &[Value], columns: &[&str]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| record.get(*c).map(|v| format_value(v, "")).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    Table::from(builder)
}
