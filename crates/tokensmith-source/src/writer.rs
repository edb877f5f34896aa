//! CSS artifact writer.

use crate::errors::SourceError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Options for artifact writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to create missing parent directories (default: true).
    pub create_dirs: bool,
    /// Whether to write through a temporary file and rename it into place
    /// (default: true). Readers never observe a half-written artifact.
    pub atomic: bool,
    /// Whether to fsync before the rename (default: false).
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            create_dirs: true,
            atomic: true,
            sync: false,
        }
    }
}

/// Writes the emitted CSS to its destination.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    path: PathBuf,
    options: WriteOptions,
}

impl ArtifactWriter {
    /// Creates a writer for `path`.
    pub fn new(path: impl Into<PathBuf>, options: WriteOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the artifact with `css`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if:
    /// - A parent directory cannot be created
    /// - The destination (or its temporary sibling) cannot be written
    /// - The temporary file cannot be renamed into place
    pub fn write(&self, css: &str) -> Result<(), SourceError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if self.options.create_dirs {
            fs::create_dir_all(&parent).map_err(|source| SourceError::PathIo {
                path: parent.clone(),
                source,
            })?;
        }

        if !self.options.atomic {
            fs::write(&self.path, css).map_err(|source| self.io_error(source))?;
            debug!(path = %self.path.display(), bytes = css.len(), "wrote artifact");
            return Ok(());
        }

        let mut temp = NamedTempFile::new_in(&parent).map_err(|source| SourceError::PathIo {
            path: parent.clone(),
            source,
        })?;
        temp.write_all(css.as_bytes())?;
        temp.flush()?;
        if self.options.sync {
            temp.as_file().sync_all()?;
        }
        temp.persist(&self.path)?;
        debug!(path = %self.path.display(), bytes = css.len(), "wrote artifact atomically");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> SourceError {
        SourceError::PathIo {
            path: self.path.clone(),
            source,
        }
    }
}

/// Reads an existing artifact. Returns `Ok(None)` if it does not exist.
pub fn read_artifact(path: &Path) -> Result<Option<String>, SourceError> {
    match fs::read_to_string(path) {
        Ok(css) => Ok(Some(css)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SourceError::PathIo {
            path: path.to_path_buf(),
            source,
        }),
    }
}
