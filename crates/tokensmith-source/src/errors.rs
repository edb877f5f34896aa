use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading documents or writing the artifact.
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// I/O error tied to a specific path.
    #[error("I/O error on {path}: {source}")]
    PathIo {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Document is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Temporary artifact could not be moved into place.
    #[error("failed to persist artifact: {0}")]
    Persist(#[from] tempfile::PersistError),
    /// Directory traversal failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Root being walked.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: walkdir::Error,
    },
}
