//! Domain Policies
//!
//! Business rules that govern which files are checked and how.
//! Pure values; no I/O.

pub mod exclusion;
pub mod metadata_schema;

pub use exclusion::{Decision, ExclusionPolicy, Mode, SkipReason};
pub use metadata_schema::MetadataSchema;
