//! Nomen - structural naming grammar validator and registry builder
//!
//! Nomen checks file names against the `{Layer}.{Role}.{Domain}.{Extension}`
//! grammar, validates `*.meta.json` sidecars against a two-profile schema,
//! and builds a deterministic manifest of every sidecar/source pair with a
//! SHA-256 digest of the source.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildResult, MetadataUseCase, NamingUseCase, RegistryUseCase};
pub use config::Config;
pub use domain::entities::{Outcome, ParsedName, Registry, RegistryEntry, Report, Verdict};
pub use domain::policies::{ExclusionPolicy, MetadataSchema};
pub use domain::services::{parse_name, Rejection};
pub use error::{NomenError, NomenResult};
pub use infrastructure::{JsonManifestRepository, JsonSchemaSource, LocalFs};
