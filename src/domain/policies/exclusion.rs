//! Exclusion policy
//!
//! Decides, before any parsing, whether a path is a naming candidate at all.
//! Two independent filters:
//!
//! - directory denylist: any path component equal to a listed name excludes
//!   everything beneath it
//! - filename denylist: glob patterns matched case-insensitively against the
//!   file name alone, regardless of directory. A sidecar is also skipped when
//!   the name it describes (suffix stripped) is exempt.
//!
//! The policy is an immutable value built once from configuration and passed
//! into each run, so different exclusion sets can be exercised side by side.

use std::collections::BTreeSet;
use std::fmt;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::domain::services::SIDECAR_SUFFIX;
use crate::domain::value_objects::RelPath;
use crate::error::{NomenError, NomenResult};

/// Directories never walked by default
pub const DEFAULT_DIRECTORIES: &[&str] = &[
    ".git",
    ".github",
    ".venv",
    "__pycache__",
    "node_modules",
    "target",
    "tools",
    "standards",
    "registry",
    "archive",
    "docs",
];

/// File name patterns exempt from the naming grammar by default
pub const DEFAULT_FILES: &[&str] = &[
    ".*",
    "_*",
    "README*",
    "LICENSE*",
    "CHANGELOG*",
    "CONTRIBUTING*",
    "CLAUDE.md",
    "Makefile",
    "Dockerfile",
    "Cargo.toml",
    "Cargo.lock",
    "nomen.toml",
    "template.*",
    "registry.json",
    "*.schema.json",
    "*.example.json",
];

/// Which filters apply to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Recursive walk from a root: both filters
    Tree,
    /// Explicitly named files: filename filter only
    FileList,
}

/// Why a path was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Directory(String),
    File(String),
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::Directory(_) => "excluded_directory",
            SkipReason::File(_) => "excluded_file",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Directory(_) => f.write_str("excluded_directory"),
            SkipReason::File(pattern) => write!(f, "excluded_file:{pattern}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Validate,
    Skip(SkipReason),
}

#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    directories: BTreeSet<String>,
    patterns: Vec<String>,
    matcher: GlobSet,
}

impl ExclusionPolicy {
    /// Build a policy. Fails on the first pattern that is not a valid glob.
    pub fn new<D, F>(directories: D, files: F) -> NomenResult<Self>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let directories = directories.into_iter().map(Into::into).collect();
        let patterns: Vec<String> = files.into_iter().map(Into::into).collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .literal_separator(true)
                .build()
                .map_err(|e| NomenError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.kind().to_string(),
                })?;
            builder.add(glob);
        }
        let matcher = builder.build().map_err(|e| NomenError::InvalidPattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            directories,
            patterns,
            matcher,
        })
    }

    /// Policy with the built-in denylists
    pub fn defaults() -> Self {
        Self::new(DEFAULT_DIRECTORIES.iter().copied(), DEFAULT_FILES.iter().copied())
            .expect("default exclusion patterns are valid globs")
    }

    /// Policy that excludes nothing
    pub fn none() -> Self {
        Self {
            directories: BTreeSet::new(),
            patterns: Vec::new(),
            matcher: GlobSet::empty(),
        }
    }

    /// Whether a single directory name is denylisted
    pub fn excluded_directory(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    /// The first pattern (in configuration order) matching a file name
    pub fn excluded_file(&self, file_name: &str) -> Option<&str> {
        self.matcher
            .matches(file_name)
            .into_iter()
            .min()
            .map(|index| self.patterns[index].as_str())
    }

    pub fn decide(&self, path: &RelPath, mode: Mode) -> Decision {
        let mut components: Vec<&str> = path.as_str().split('/').collect();
        let file_name = components.pop().unwrap_or_default();

        if mode == Mode::Tree {
            if let Some(dir) = components.iter().find(|c| self.excluded_directory(c)) {
                return Decision::Skip(SkipReason::Directory(dir.to_string()));
            }
        }
        let described = file_name
            .strip_suffix(SIDECAR_SUFFIX)
            .filter(|base| !base.is_empty());
        match self
            .excluded_file(file_name)
            .or_else(|| described.and_then(|base| self.excluded_file(base)))
        {
            Some(pattern) => Decision::Skip(SkipReason::File(pattern.to_string())),
            None => Decision::Validate,
        }
    }

    pub fn should_validate(&self, path: &RelPath) -> bool {
        self.decide(path, Mode::Tree) == Decision::Validate
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::defaults()
    }
}
