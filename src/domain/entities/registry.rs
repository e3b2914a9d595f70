//! Registry entity
//!
//! The manifest of every tracked source/sidecar pair. Rebuilt wholesale on
//! each run: there is no merge with a previous manifest, so the registry is
//! always a snapshot of what is currently on disk.

use crate::domain::value_objects::{ContentHash, RelPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Sidecar's declared `name`, or the source file name
    pub name: String,
    pub source_path: RelPath,
    pub meta_path: RelPath,
    pub hash: ContentHash,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    resources: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in any order; entries are kept in sidecar path order.
    pub fn from_entries(mut resources: Vec<RegistryEntry>) -> Self {
        resources.sort_by(|a, b| a.meta_path.cmp(&b.meta_path));
        Self { resources }
    }

    pub fn resources(&self) -> &[RegistryEntry] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests;
