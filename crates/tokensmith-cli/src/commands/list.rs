//! List command implementation.

use crate::config::Settings;
use crate::output;
use serde_json::json;
use tokensmith_source::compile_dir;

pub fn run(settings: &Settings, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = compile_dir(&settings.input, settings.compile.clone())
        .map_err(|e| format!("Failed to read tokens from {}: {}", settings.input.display(), e))?;

    if !json {
        output::print_table_header();
    }

    for (name, value) in &output.tokens {
        if json {
            println!("{}", serde_json::to_string(&json!({ "name": name, "value": value }))?);
        } else {
            println!("{}", output::format_table_row(name.as_str(), value));
        }
    }

    Ok(())
}
