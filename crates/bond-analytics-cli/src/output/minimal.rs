use serde_json::Value;

use super::{format_value, summary_of};

/// Print just the headline figure of the summary.
///
/// Looks for well-known summary fields in order of priority, skipping
/// nulls, then falls back to the record count.
pub fn print_minimal(value: &Value) {
    let summary = summary_of(value);

    let priority_keys = ["avg_ytm", "avg_running_yield", "avg_duration_mod"];

    if let Value::Object(map) = summary {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val, "null"));
                    return;
                }
            }
        }

        if let Some(count) = map.get("count") {
            println!("count: {}", format_value(count, "null"));
            return;
        }
    }

    println!("{}", format_value(summary, "null"));
}
