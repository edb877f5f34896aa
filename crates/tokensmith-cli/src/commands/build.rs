//! Build command implementation.

use crate::config::Settings;
use crate::output;
use tokensmith_source::{compile_dir, ArtifactWriter, WriteOptions};

pub fn run(settings: &Settings, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = compile_dir(&settings.input, settings.compile.clone())
        .map_err(|e| format!("Failed to read tokens from {}: {}", settings.input.display(), e))?;

    ArtifactWriter::new(&settings.output, WriteOptions::default())
        .write(&output.css)
        .map_err(|e| format!("Failed to write {}: {}", settings.output.display(), e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output.report)?);
    } else {
        println!("{}", output::format_summary(&settings.output, &output.report));
    }
    Ok(())
}
