//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod layer;
mod profile;
mod rel_path;

pub use hash::ContentHash;
pub use layer::{Layer, LayerSpelling};
pub use profile::{Profile, SchemaType};
pub use rel_path::RelPath;
