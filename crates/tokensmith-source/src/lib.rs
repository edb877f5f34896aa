//! Filesystem collaborators for the tokensmith compiler.
//!
//! This crate provides:
//! - Discovery of token documents under a directory, in a stable order
//! - Per-document loading where a corrupt file is skipped, not fatal
//! - Atomic writing of the emitted CSS artifact
//!
//! ## Quick Start
//!
//! ```no_run
//! use tokensmith_core::CompileOptions;
//! use tokensmith_source::{compile_dir, ArtifactWriter, WriteOptions};
//!
//! let output = compile_dir("src/styles/import", CompileOptions::default())?;
//! ArtifactWriter::new("src/styles/tokens.css", WriteOptions::default()).write(&output.css)?;
//! println!("{} variables", output.tokens.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Error types for source operations.
pub mod errors;
/// Reading and parsing single documents.
pub mod loader;
/// Document discovery.
pub mod provider;
/// CSS artifact writer.
pub mod writer;

pub use errors::SourceError;
pub use loader::{load_document, parse_document};
pub use provider::{is_document, DirectorySource, DocumentSource, METADATA_MARKER};
pub use writer::{read_artifact, ArtifactWriter, WriteOptions};

use std::path::Path;
use tokensmith_core::{CompileOptions, CompileOutput, Compiler};

/// Discovers, loads and compiles every document under `root`.
///
/// A missing `root` compiles to an empty block.
pub fn compile_dir<P: AsRef<Path>>(
    root: P,
    options: CompileOptions,
) -> Result<CompileOutput, SourceError> {
    let mut source = DirectorySource::new(root.as_ref());
    let inputs = source.documents()?;
    Ok(Compiler::new(options).compile_loaded(inputs))
}
