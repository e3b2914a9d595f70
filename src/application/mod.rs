//! Application Layer
//!
//! Use cases that orchestrate a run.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `NamingUseCase` - Walk or list files, apply exclusions, check the grammar
//! - `MetadataUseCase` - Validate sidecar documents against a schema
//! - `RegistryUseCase` - Pair sidecars with sources, digest, write the manifest

pub mod metadata;
pub mod naming;
pub mod registry;

pub use metadata::MetadataUseCase;
pub use naming::NamingUseCase;
pub use registry::{BuildResult, RegistryUseCase};
