//! Metadata sidecar validation
//!
//! A sidecar is first checked as loose JSON so every defect can be collected
//! in one pass; only a clean document is decoded into its typed profile.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::domain::entities::{FullMetadata, LightMetadata, MetadataDocument};
use crate::domain::policies::metadata_schema::{
    MetadataSchema, FIELD_CONFORMS_TO, FIELD_DATE_CREATED, FIELD_DATE_MODIFIED,
    FIELD_ENCODING_FORMAT, FIELD_IDENTIFIER, FIELD_NAME, FIELD_PROFILE, FIELD_SCHEMA_TYPE,
    FIELD_VERSION,
};
use crate::domain::value_objects::{Profile, SchemaType};

/// SemVer 2.0: no leading zeros, optional pre-release and build metadata
static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver regex is valid")
});

const PLAIN_STRING_FIELDS: [&str; 5] = [
    FIELD_NAME,
    FIELD_ENCODING_FORMAT,
    "programmingLanguage",
    "license",
    "inLanguage",
];
const STRING_OR_LIST_FIELDS: [&str; 2] = ["creator", "dc:subject"];

/// One defect in a sidecar document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("malformed_document:{detail}")]
    MalformedDocument { detail: String },

    #[error("unknown_profile{}", .value.as_deref().map(|v| format!(":{v}")).unwrap_or_default())]
    UnknownProfile { value: Option<String> },

    #[error("missing_required_field:{field}")]
    MissingRequiredField { field: String },

    #[error("invalid_uri:{field}")]
    InvalidUri { field: String },

    #[error("invalid_semver:{value}")]
    InvalidSemver { value: String },

    #[error("invalid_schema_type:{value}")]
    InvalidSchemaType { value: String },

    #[error("invalid_timestamp:{field}")]
    InvalidTimestamp { field: String },

    #[error("invalid_type:{field}")]
    InvalidType { field: String },
}

impl Violation {
    fn invalid_type(field: &str) -> Self {
        Violation::InvalidType {
            field: field.to_string(),
        }
    }

    fn invalid_uri(field: &str) -> Self {
        Violation::InvalidUri {
            field: field.to_string(),
        }
    }
}

/// Checks sidecar documents against a [`MetadataSchema`]
#[derive(Debug, Clone, Copy)]
pub struct SidecarValidator<'a> {
    schema: &'a MetadataSchema,
}

impl<'a> SidecarValidator<'a> {
    pub fn new(schema: &'a MetadataSchema) -> Self {
        Self { schema }
    }

    /// Validate document text. On failure every violation found is returned,
    /// in field order: profile, required fields, then per-field formats.
    pub fn validate(&self, text: &str) -> Result<MetadataDocument, Vec<Violation>> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            vec![Violation::MalformedDocument {
                detail: e.to_string(),
            }]
        })?;
        let Value::Object(fields) = value else {
            return Err(vec![Violation::MalformedDocument {
                detail: "expected an object".to_string(),
            }]);
        };

        let mut violations = Vec::new();

        let profile = match fields.get(FIELD_PROFILE) {
            Some(Value::String(s)) => {
                let profile = Profile::from_discriminant(s);
                if profile.is_none() {
                    violations.push(Violation::UnknownProfile {
                        value: Some(s.clone()),
                    });
                }
                profile
            }
            Some(Value::Null) | None => {
                violations.push(Violation::UnknownProfile { value: None });
                None
            }
            Some(other) => {
                violations.push(Violation::UnknownProfile {
                    value: Some(other.to_string()),
                });
                None
            }
        };

        if let Some(profile) = profile {
            for field in self.schema.required_for(profile) {
                if present(&fields, field).is_none() {
                    violations.push(Violation::MissingRequiredField {
                        field: field.clone(),
                    });
                }
            }
        }

        check_formats(&fields, &mut violations);

        if !violations.is_empty() {
            return Err(violations);
        }

        // A missing profile always records a violation, so profile is Some here.
        let decoded = match profile {
            Some(Profile::Full) => serde_json::from_value::<FullMetadata>(Value::Object(fields))
                .map(MetadataDocument::Full),
            _ => serde_json::from_value::<LightMetadata>(Value::Object(fields))
                .map(MetadataDocument::Light),
        };
        decoded.map_err(|e| {
            vec![Violation::MalformedDocument {
                detail: e.to_string(),
            }]
        })
    }
}

/// The declared `name` of a sidecar, if the text parses and carries a
/// non-empty string there. Used by the registry, which records what is on
/// disk without requiring a valid document.
pub fn declared_name(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value.get(FIELD_NAME)? {
        Value::String(name) if !name.trim().is_empty() => Some(name.clone()),
        _ => None,
    }
}

/// A field counts as present when it exists and is not `null`
fn present<'v>(fields: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn check_formats(fields: &Map<String, Value>, violations: &mut Vec<Violation>) {
    for key in PLAIN_STRING_FIELDS {
        if let Some(value) = present(fields, key) {
            if non_empty_str(value).is_none() {
                violations.push(Violation::invalid_type(key));
            }
        }
    }

    if let Some(value) = present(fields, FIELD_IDENTIFIER) {
        match value.as_str() {
            Some(s) if Url::parse(s).is_ok() => {}
            Some(_) => violations.push(Violation::invalid_uri(FIELD_IDENTIFIER)),
            None => violations.push(Violation::invalid_type(FIELD_IDENTIFIER)),
        }
    }

    if let Some(value) = present(fields, FIELD_VERSION) {
        match value.as_str() {
            Some(s) if SEMVER_REGEX.is_match(s) => {}
            Some(s) => violations.push(Violation::InvalidSemver {
                value: s.to_string(),
            }),
            None => violations.push(Violation::invalid_type(FIELD_VERSION)),
        }
    }

    if let Some(value) = present(fields, FIELD_SCHEMA_TYPE) {
        match value.as_str() {
            Some(s) if SchemaType::parse(s).is_some() => {}
            Some(s) => violations.push(Violation::InvalidSchemaType {
                value: s.to_string(),
            }),
            None => violations.push(Violation::invalid_type(FIELD_SCHEMA_TYPE)),
        }
    }

    if let Some(value) = present(fields, FIELD_CONFORMS_TO) {
        match value.as_array() {
            Some(items) if !items.is_empty() => {
                for (index, item) in items.iter().enumerate() {
                    if !item.as_str().is_some_and(|s| Url::parse(s).is_ok()) {
                        violations.push(Violation::InvalidUri {
                            field: format!("{FIELD_CONFORMS_TO}[{index}]"),
                        });
                    }
                }
            }
            _ => violations.push(Violation::invalid_type(FIELD_CONFORMS_TO)),
        }
    }

    for key in [FIELD_DATE_CREATED, FIELD_DATE_MODIFIED] {
        if let Some(value) = present(fields, key) {
            match value.as_str() {
                Some(s) if DateTime::parse_from_rfc3339(s).is_ok() => {}
                Some(_) => violations.push(Violation::InvalidTimestamp {
                    field: key.to_string(),
                }),
                None => violations.push(Violation::invalid_type(key)),
            }
        }
    }

    for key in STRING_OR_LIST_FIELDS {
        if let Some(value) = present(fields, key) {
            let ok = match value {
                Value::String(s) => !s.trim().is_empty(),
                Value::Array(items) => {
                    !items.is_empty() && items.iter().all(|i| non_empty_str(i).is_some())
                }
                _ => false,
            };
            if !ok {
                violations.push(Violation::invalid_type(key));
            }
        }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}
