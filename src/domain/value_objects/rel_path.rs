//! Root-relative path value object
//!
//! Reports and the registry manifest always show paths relative to the
//! walked root and `/`-separated, regardless of host platform.

use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

/// A `/`-separated path relative to a walk root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelPath(String);

impl RelPath {
    /// Build from a path under `root`. Paths outside `root` keep their own
    /// components (explicit file-list mode may name anything).
    pub fn new(path: &Path, root: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path);
        Self::from_components(relative)
    }

    /// Build from an arbitrary path without stripping a root
    pub fn from_components(path: &Path) -> Self {
        let parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
            })
            .collect();
        let joined = parts.join("/");
        if path.has_root() {
            Self(format!("/{}", joined))
        } else {
            Self(joined)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last `/`-separated component
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelPath {
    fn from(s: &str) -> Self {
        Self::from_components(Path::new(s))
    }
}
