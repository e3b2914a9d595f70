//! FileSystem port - abstraction over the read-only tree operations
//!
//! Use cases walk, read and digest through this trait so they can be driven
//! by the local disk in production and by fixtures in tests.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::policies::ExclusionPolicy;
use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Everything a recursive walk found
#[derive(Debug, Default)]
pub struct TreeListing {
    /// Regular files, in lexicographic path order
    pub files: Vec<PathBuf>,
    /// Directories not descended into because the policy denylists them
    pub pruned: Vec<PathBuf>,
    /// Entries the walk could not read
    pub errors: Vec<(PathBuf, String)>,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - local disk, walk via the `ignore` crate
pub trait FileSystem: Send + Sync {
    /// Recursively list files under `root`, pruning denylisted directories.
    /// Fails only when `root` itself is unusable.
    fn walk(&self, root: &Path, policy: &ExclusionPolicy) -> FsResult<TreeListing>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// SHA-256 of the raw bytes, streamed
    fn digest(&self, path: &Path) -> FsResult<ContentHash>;

    /// Check that a regular file exists
    fn is_file(&self, path: &Path) -> bool;
}
