//! Document discovery.

use crate::errors::SourceError;
use crate::loader::load_document;
use std::path::{Path, PathBuf};
use tokensmith_core::{Document, SkippedDocument};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names starting with this character hold metadata, not tokens.
pub const METADATA_MARKER: char = '$';

const DOCUMENT_EXTENSION: &str = "json";

/// A source of token documents in merge order.
///
/// Each entry is either a parsed document or the reason it could not be
/// loaded. Order matters: later documents override earlier ones.
pub trait DocumentSource {
    /// Returns every document, in merge order.
    fn documents(&mut self) -> Result<Vec<Result<Document, SkippedDocument>>, SourceError>;
}

/// Documents found recursively under a directory.
///
/// Paths are enumerated in sorted order so merge order does not depend on
/// the filesystem. Files whose name starts with [`METADATA_MARKER`] and
/// files without a `.json` extension are excluded.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists candidate document paths in merge order.
    ///
    /// A missing root yields no paths. Unreadable entries below the root are
    /// logged and skipped.
    pub fn discover(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "source directory missing; no documents");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(SourceError::Walk {
                        path: self.root.clone(),
                        source: err,
                    });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && is_document(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&mut self) -> Result<Vec<Result<Document, SkippedDocument>>, SourceError> {
        let paths = self.discover()?;
        debug!(root = %self.root.display(), count = paths.len(), "discovered documents");
        Ok(paths
            .iter()
            .map(|path| {
                load_document(path).map_err(|err| SkippedDocument {
                    document: path.display().to_string(),
                    reason: err.to_string(),
                })
            })
            .collect())
    }
}

/// Returns true for `.json` files whose name does not start with the
/// metadata marker.
pub fn is_document(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
    is_json && !name.starts_with(METADATA_MARKER)
}
