//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::policies::ExclusionPolicy;
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, TreeListing};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Walks with the `ignore` crate but with every VCS/hidden filter turned
/// off: exclusion is decided by [`ExclusionPolicy`] alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn walk(&self, root: &Path, policy: &ExclusionPolicy) -> FsResult<TreeListing> {
        if !root.is_dir() {
            return Err(FsError::NotFound(root.to_path_buf()));
        }

        let pruned = Arc::new(Mutex::new(Vec::new()));
        let filter_policy = policy.clone();
        let filter_pruned = Arc::clone(&pruned);

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                if entry.depth() == 0 || !is_dir {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if filter_policy.excluded_directory(&name) {
                    debug!(path = %entry.path().display(), "pruned excluded directory");
                    if let Ok(mut pruned) = filter_pruned.lock() {
                        pruned.push(entry.path().to_path_buf());
                    }
                    return false;
                }
                true
            })
            .build();

        let mut listing = TreeListing::default();
        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|t| t.is_file())
                        || (entry.path_is_symlink() && entry.path().is_file());
                    if is_file {
                        listing.files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let path = error_path(&err).unwrap_or_else(|| root.to_path_buf());
                    debug!(path = %path.display(), error = %err, "walk error");
                    listing.errors.push((path, err.to_string()));
                }
            }
        }

        listing.files.sort();
        listing.pruned = match Arc::try_unwrap(pruned) {
            Ok(mutex) => mutex.into_inner().unwrap_or_default(),
            Err(shared) => shared.lock().map(|p| p.clone()).unwrap_or_default(),
        };
        listing.pruned.sort();
        Ok(listing)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn digest(&self, path: &Path) -> FsResult<ContentHash> {
        let mut file = File::open(path).map_err(|e| FsError::at(path, e))?;
        ContentHash::from_reader(&mut file).map_err(|e| FsError::at(path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
