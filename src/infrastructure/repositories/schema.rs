//! JSON Schema Source
//!
//! Reads a metadata schema definition:
//!
//! ```json
//! {
//!   "version": "1.1",
//!   "profiles": {
//!     "light": { "required": ["name", "identifier", "version"] },
//!     "full":  { "required": ["name", "identifier", "version", "schema:type", "..."] }
//!   }
//! }
//! ```
//!
//! Keys other than these are ignored so a definition can carry prose.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::policies::MetadataSchema;
use crate::domain::ports::{SchemaError, SchemaSource};

#[derive(Debug, Deserialize)]
struct ProfileDef {
    required: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Profiles {
    light: ProfileDef,
    full: ProfileDef,
}

#[derive(Debug, Deserialize)]
struct SchemaFile {
    version: String,
    profiles: Profiles,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaSource;

impl JsonSchemaSource {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(path: &Path, content: &str) -> Result<MetadataSchema, SchemaError> {
        let file: SchemaFile =
            serde_json::from_str(content).map_err(|e| SchemaError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        MetadataSchema::new(
            file.version,
            file.profiles.light.required,
            file.profiles.full.required,
        )
    }
}

impl SchemaSource for JsonSchemaSource {
    fn load(&self, path: &Path) -> Result<MetadataSchema, SchemaError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SchemaError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(SchemaError::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let schema = Self::parse(path, &content)?;
        debug!(path = %path.display(), version = schema.version(), "loaded metadata schema");
        Ok(schema)
    }
}
