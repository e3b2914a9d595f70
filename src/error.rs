//! Error types for Nomen
//!
//! Uses `thiserror` for library errors. Per-file problems are not errors:
//! they surface as verdicts or [`crate::domain::entities::RunError`] records.
//! Everything here aborts the run before (or instead of) producing a report.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for Nomen operations
pub type NomenResult<T> = Result<T, NomenError>;

/// Main error type for Nomen operations
#[derive(Error, Debug)]
pub enum NomenError {
    /// Root passed to a tree walk does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Project configuration could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An exclusion glob did not compile
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Metadata schema definition could not be loaded
    #[error(transparent)]
    Schema(#[from] crate::domain::ports::SchemaError),

    /// Registry manifest could not be written
    #[error(transparent)]
    Manifest(#[from] crate::domain::ports::ManifestError),

    /// Tree walk failed for a reason other than a missing root
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NomenError {
    /// Map a failed walk of `root`; a missing root gets its own variant.
    pub fn from_walk(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => NomenError::DirectoryNotFound { path },
            other => NomenError::Fs(other),
        }
    }
}
