//! Metadata sidecar entities
//!
//! A sidecar commits to one of two profiles. Each profile is a fixed struct
//! and the document is the tagged variant selected by the `profile`
//! discriminant, so callers never inspect an untyped field bag.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::value_objects::{Profile, SchemaType};

/// A field that may be written as one string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Descriptive fields allowed (never required) under both profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<OneOrMany>,
    #[serde(rename = "dc:subject", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<OneOrMany>,
    #[serde(rename = "programmingLanguage", default, skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(rename = "inLanguage", default, skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
}

/// Light profile: only identity fields are required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightMetadata {
    pub name: String,
    pub identifier: Url,
    pub version: String,
    #[serde(rename = "schema:type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(rename = "conformsTo", default, skip_serializing_if = "Option::is_none")]
    pub conforms_to: Option<Vec<Url>>,
    #[serde(rename = "encodingFormat", default, skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(rename = "dateCreated", default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<FixedOffset>>,
    #[serde(rename = "dateModified", default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<FixedOffset>>,
    #[serde(flatten)]
    pub descriptive: Descriptive,
}

/// Full profile: identity plus classification and provenance are required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullMetadata {
    pub name: String,
    pub identifier: Url,
    pub version: String,
    #[serde(rename = "schema:type")]
    pub schema_type: SchemaType,
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<Url>,
    #[serde(rename = "encodingFormat")]
    pub encoding_format: String,
    #[serde(rename = "dateCreated")]
    pub date_created: DateTime<FixedOffset>,
    #[serde(rename = "dateModified")]
    pub date_modified: DateTime<FixedOffset>,
    #[serde(flatten)]
    pub descriptive: Descriptive,
}

/// A validated sidecar
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataDocument {
    Light(LightMetadata),
    Full(FullMetadata),
}

impl MetadataDocument {
    pub fn profile(&self) -> Profile {
        match self {
            MetadataDocument::Light(_) => Profile::Light,
            MetadataDocument::Full(_) => Profile::Full,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            MetadataDocument::Light(m) => &m.version,
            MetadataDocument::Full(m) => &m.version,
        }
    }
}
