//! Configuration module for Nomen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NOMEN_*)
//! 3. Project config (`nomen.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{
    ColorMode, Config, ExcludeConfig, MetaConfig, OutputConfig, RegistryConfig, SchemaLocation,
    CONFIG_FILE, DEFAULT_REGISTRY_OUT, DEFAULT_SCHEMA_PATH,
};
