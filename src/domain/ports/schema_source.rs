//! SchemaSource port - where the metadata schema definition comes from

use std::path::{Path, PathBuf};

use crate::domain::policies::MetadataSchema;
use crate::domain::value_objects::Profile;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read schema {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("malformed schema {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("schema drops required field '{field}' from the {profile} profile")]
    Weakened { profile: Profile, field: String },
}

pub trait SchemaSource {
    /// Load a schema definition from `path`
    ///
    /// A missing file is [`SchemaError::NotFound`] wherever the path came from.
    fn load(&self, path: &Path) -> Result<MetadataSchema, SchemaError>;
}
