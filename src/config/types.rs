//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::exclusion::{DEFAULT_DIRECTORIES, DEFAULT_FILES};
use crate::domain::policies::ExclusionPolicy;
use crate::error::NomenResult;

use super::loader::{self, ConfigWarning};

/// Project configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "nomen.toml";

/// Default schema definition location
pub const DEFAULT_SCHEMA_PATH: &str = "standards/metadata-sidecar.v1.1.schema.json";

/// Default manifest location
pub const DEFAULT_REGISTRY_OUT: &str = "registry/registry.json";

/// Exclusion lists
///
/// `directories` / `files` replace the built-in lists when set;
/// `extra_*` are appended to whichever list is in effect.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExcludeConfig {
    #[serde(default)]
    pub directories: Option<Vec<String>>,

    #[serde(default)]
    pub files: Option<Vec<String>>,

    #[serde(default)]
    pub extra_directories: Vec<String>,

    #[serde(default)]
    pub extra_files: Vec<String>,
}

impl ExcludeConfig {
    /// Resolve into an immutable policy value
    pub fn policy(&self) -> NomenResult<ExclusionPolicy> {
        let directories = resolve_list(&self.directories, DEFAULT_DIRECTORIES, &self.extra_directories);
        let files = resolve_list(&self.files, DEFAULT_FILES, &self.extra_files);
        ExclusionPolicy::new(directories, files)
    }
}

fn resolve_list(explicit: &Option<Vec<String>>, defaults: &[&str], extra: &[String]) -> Vec<String> {
    let mut list: Vec<String> = match explicit {
        Some(list) => list.clone(),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    };
    list.extend(extra.iter().cloned());
    list
}

/// Metadata validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetaConfig {
    /// Schema definition path; unset means the default location
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

/// Where the schema comes from. Either way the file must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaLocation {
    Default(PathBuf),
    Explicit(PathBuf),
}

impl SchemaLocation {
    pub fn path(&self) -> &Path {
        match self {
            SchemaLocation::Default(p) | SchemaLocation::Explicit(p) => p,
        }
    }
}

/// Registry builder configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_out")]
    pub out: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            out: default_registry_out(),
        }
    }
}

fn default_registry_out() -> PathBuf {
    PathBuf::from(DEFAULT_REGISTRY_OUT)
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const NAMES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub exclude: ExcludeConfig,

    #[serde(default)]
    pub meta: MetaConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load `nomen.toml` from `project_root` when present, then apply
    /// environment overrides. A malformed file is an error.
    pub fn load_project(project_root: &Path) -> NomenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_project(project_root)
    }

    pub fn schema_location(&self) -> SchemaLocation {
        match &self.meta.schema {
            Some(path) => SchemaLocation::Explicit(path.clone()),
            None => SchemaLocation::Default(PathBuf::from(DEFAULT_SCHEMA_PATH)),
        }
    }
}
