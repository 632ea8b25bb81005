use serde_json::Value;

/// Print the report or summary as indented JSON on stdout.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Failed to render bond output as JSON: {e}"),
    }
}
