use serde_json::Value;
use std::io::{self, Read};

/// Read bond records piped into `bonds summarize` (e.g. the output of
/// `bonds report`). Returns None when stdin is a terminal or carries no data.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut piped = String::new();
    io::stdin()
        .read_to_string(&mut piped)
        .map_err(|e| format!("Failed to read bonds from stdin: {}", e))?;

    let piped = piped.trim();
    if piped.is_empty() {
        return Ok(None);
    }

    let bonds = serde_json::from_str(piped)
        .map_err(|e| format!("stdin is not a JSON bond list or report: {}", e))?;
    Ok(Some(bonds))
}
