//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `repositories/` - Repository implementations (Manifest, Schema)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::{JsonManifestRepository, JsonSchemaSource};
