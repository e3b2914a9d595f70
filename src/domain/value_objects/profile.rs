//! Metadata profile and schema type value objects

use serde::{Deserialize, Serialize};

/// Which required-field set a sidecar commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Light,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Light => "light",
            Profile::Full => "full",
        }
    }

    /// Parse the `profile` discriminant. No default is assumed.
    pub fn from_discriminant(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Profile::Light),
            "full" => Some(Profile::Full),
            _ => None,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten permitted values of the `schema:type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaType {
    SoftwareSourceCode,
    SoftwareApplication,
    CreativeWork,
    Dataset,
    ImageObject,
    AudioObject,
    VideoObject,
    TextDigitalDocument,
    WebPage,
    Article,
}

impl SchemaType {
    pub const ALL: [SchemaType; 10] = [
        SchemaType::SoftwareSourceCode,
        SchemaType::SoftwareApplication,
        SchemaType::CreativeWork,
        SchemaType::Dataset,
        SchemaType::ImageObject,
        SchemaType::AudioObject,
        SchemaType::VideoObject,
        SchemaType::TextDigitalDocument,
        SchemaType::WebPage,
        SchemaType::Article,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::SoftwareSourceCode => "SoftwareSourceCode",
            SchemaType::SoftwareApplication => "SoftwareApplication",
            SchemaType::CreativeWork => "CreativeWork",
            SchemaType::Dataset => "Dataset",
            SchemaType::ImageObject => "ImageObject",
            SchemaType::AudioObject => "AudioObject",
            SchemaType::VideoObject => "VideoObject",
            SchemaType::TextDigitalDocument => "TextDigitalDocument",
            SchemaType::WebPage => "WebPage",
            SchemaType::Article => "Article",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_discriminant_is_exact() {
        assert_eq!(Profile::from_discriminant("light"), Some(Profile::Light));
        assert_eq!(Profile::from_discriminant("full"), Some(Profile::Full));
        assert_eq!(Profile::from_discriminant("Full"), None);
        assert_eq!(Profile::from_discriminant("invalid"), None);
    }

    #[test]
    fn every_schema_type_round_trips_through_its_name() {
        for t in SchemaType::ALL {
            assert_eq!(SchemaType::parse(t.as_str()), Some(t));
        }
        assert_eq!(SchemaType::parse("InvalidType"), None);
    }

    #[test]
    fn schema_type_serde_uses_pascal_case_names() {
        let json = serde_json::to_string(&SchemaType::TextDigitalDocument).unwrap();
        assert_eq!(json, "\"TextDigitalDocument\"");
    }
}
