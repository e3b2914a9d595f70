//! Metadata schema policy
//!
//! Versioned description of the two sidecar profiles. The built-in v1.1
//! schema is the floor: a schema loaded from disk may require more fields
//! per profile but never fewer, because the typed profile structs rely on
//! the built-in required set.

use crate::domain::ports::SchemaError;
use crate::domain::value_objects::Profile;

pub const FIELD_NAME: &str = "name";
pub const FIELD_IDENTIFIER: &str = "identifier";
pub const FIELD_VERSION: &str = "version";
pub const FIELD_SCHEMA_TYPE: &str = "schema:type";
pub const FIELD_CONFORMS_TO: &str = "conformsTo";
pub const FIELD_ENCODING_FORMAT: &str = "encodingFormat";
pub const FIELD_DATE_CREATED: &str = "dateCreated";
pub const FIELD_DATE_MODIFIED: &str = "dateModified";
pub const FIELD_PROFILE: &str = "profile";

const LIGHT_REQUIRED: [&str; 3] = [FIELD_NAME, FIELD_IDENTIFIER, FIELD_VERSION];
const FULL_ONLY_REQUIRED: [&str; 5] = [
    FIELD_SCHEMA_TYPE,
    FIELD_CONFORMS_TO,
    FIELD_ENCODING_FORMAT,
    FIELD_DATE_CREATED,
    FIELD_DATE_MODIFIED,
];

/// Version string of the built-in schema
pub const BUILTIN_SCHEMA_VERSION: &str = "1.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSchema {
    version: String,
    light_required: Vec<String>,
    full_required: Vec<String>,
}

impl MetadataSchema {
    /// The v1.1 schema compiled into the binary
    pub fn builtin() -> Self {
        let light: Vec<String> = LIGHT_REQUIRED.iter().map(|s| s.to_string()).collect();
        let full = light
            .iter()
            .cloned()
            .chain(FULL_ONLY_REQUIRED.iter().map(|s| s.to_string()))
            .collect();
        Self {
            version: BUILTIN_SCHEMA_VERSION.to_string(),
            light_required: light,
            full_required: full,
        }
    }

    /// Build a schema from a definition. Every profile must keep the
    /// built-in required fields; extra fields are appended in the order given.
    pub fn new(
        version: impl Into<String>,
        light_required: Vec<String>,
        full_required: Vec<String>,
    ) -> Result<Self, SchemaError> {
        let builtin = Self::builtin();
        for (profile, given, floor) in [
            (Profile::Light, &light_required, &builtin.light_required),
            (Profile::Full, &full_required, &builtin.full_required),
        ] {
            if let Some(missing) = floor.iter().find(|f| !given.contains(f)) {
                return Err(SchemaError::Weakened {
                    profile,
                    field: missing.clone(),
                });
            }
        }

        Ok(Self {
            version: version.into(),
            light_required: dedup(light_required),
            full_required: dedup(full_required),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Required fields for a profile, in declaration order
    pub fn required_for(&self, profile: Profile) -> &[String] {
        match profile {
            Profile::Light => &self.light_required,
            Profile::Full => &self.full_required,
        }
    }
}

impl Default for MetadataSchema {
    fn default() -> Self {
        Self::builtin()
    }
}

fn dedup(fields: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if !out.contains(&field) {
            out.push(field);
        }
    }
    out
}
