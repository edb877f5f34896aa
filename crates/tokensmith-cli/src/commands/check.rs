//! Check command implementation.

use crate::config::Settings;
use tokensmith_canonical::Digest;
use tokensmith_source::{compile_dir, read_artifact};

pub fn run(settings: &Settings, expected: Option<&Digest>) -> Result<(), Box<dyn std::error::Error>> {
    let output = compile_dir(&settings.input, settings.compile.clone())
        .map_err(|e| format!("Failed to read tokens from {}: {}", settings.input.display(), e))?;

    if let Some(expected) = expected {
        match &output.report.digest {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                return Err(format!("digest mismatch: expected {}, got {}", expected, actual).into())
            }
            None => return Err("build produced no digest".into()),
        }
    }

    let path = settings.output.display();
    match read_artifact(&settings.output)? {
        None => Err(format!("{} is missing; run `tokensmith build`", path).into()),
        Some(existing) if existing != output.css => {
            Err(format!("{} is out of date; run `tokensmith build`", path).into())
        }
        Some(_) => {
            println!("{} is up to date ({} variables)", path, output.tokens.len());
            Ok(())
        }
    }
}
