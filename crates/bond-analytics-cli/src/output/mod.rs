pub mod csv_out;
pub mod file;
pub mod json;
pub mod minimal;
pub mod table;
pub mod yaml;

use crate::OutputFormat;
use serde_json::Value;

/// Bond record columns in display order.
pub const BOND_COLUMNS: [&str; 12] = [
    "ticker",
    "isin",
    "issuer",
    "currency",
    "coupon",
    "maturity",
    "years_to_maturity",
    "price",
    "running_yield",
    "ytm",
    "duration_mod",
    "bucket",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Yaml => yaml::print_yaml(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The summary object, whether `value` is a full report or a bare summary.
pub fn summary_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(value)
}

/// Render a scalar cell.
pub fn format_value(value: &Value, null: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => null.to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
