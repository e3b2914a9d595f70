//! Domain Layer
//!
//! Pure naming and metadata rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ParsedName, Verdict, MetadataDocument, Registry)
//! - `value_objects/` - Immutable value types (Layer, Profile, ContentHash, RelPath)
//! - `services/` - Domain services (grammar engine, sidecar validator)
//! - `policies/` - Business rules (ExclusionPolicy, MetadataSchema)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
