//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod manifest;
mod schema;

pub use manifest::JsonManifestRepository;
pub use schema::JsonSchemaSource;
