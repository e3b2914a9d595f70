//! Domain Entities
//!
//! - `ParsedName` - a file name decomposed by the grammar
//! - `Verdict` / `Report` - per-file outcomes of a validator run
//! - `MetadataDocument` - a validated sidecar, light or full
//! - `Registry` - the manifest of tracked source/sidecar pairs

mod metadata;
mod parsed_name;
mod registry;
mod verdict;

pub use metadata::{Descriptive, FullMetadata, LightMetadata, MetadataDocument, OneOrMany};
pub use parsed_name::ParsedName;
pub use registry::{Registry, RegistryEntry};
pub use verdict::{Outcome, Report, RunError, RunErrorKind, Summary, Verdict};
