//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod manifest_repository;
pub mod schema_source;

pub use file_system::{FileSystem, FsError, FsResult, TreeListing};
pub use manifest_repository::{ManifestError, ManifestRepository, SaveOutcome};
pub use schema_source::{SchemaError, SchemaSource};
