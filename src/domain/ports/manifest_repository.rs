//! ManifestRepository port
//!
//! Persists the registry manifest. The manifest is always replaced wholesale.

use std::path::{Path, PathBuf};

use crate::domain::entities::Registry;

/// What a save did on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// Existing file already held identical bytes
    Unchanged,
}

pub trait ManifestRepository: Send + Sync {
    fn save(&self, registry: &Registry, out: &Path) -> Result<SaveOutcome, ManifestError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("failed to write manifest {}: {message}", .path.display())]
    AccessError { path: PathBuf, message: String },

    #[error("failed to lock manifest {}: {message}", .path.display())]
    LockError { path: PathBuf, message: String },

    #[error("failed to serialize manifest: {message}")]
    SerializationError { message: String },
}
