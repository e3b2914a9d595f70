//! Property tests for the metadata sidecar validator.

use proptest::prelude::*;
use serde_json::json;

use nomen::domain::services::SidecarValidator;
use nomen::MetadataSchema;

fn semver() -> impl Strategy<Value = String> {
    (
        0u32..200,
        0u32..200,
        0u32..200,
        proptest::option::of("[a-z][a-z0-9]{0,5}(\\.[1-9][0-9]?)?"),
        proptest::option::of("[a-z0-9]{1,6}"),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut v = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                v.push('-');
                v.push_str(&pre);
            }
            if let Some(build) = build {
                v.push('+');
                v.push_str(&build);
            }
            v
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary text.
    #[test]
    fn property_validate_never_panics(s in "(?s).{0,256}") {
        let schema = MetadataSchema::builtin();
        let _ = SidecarValidator::new(&schema).validate(&s);
    }

    /// PROPERTY: a light document with any well-formed semver is valid.
    #[test]
    fn property_light_document_accepts_semver(version in semver(), name in "[a-z][a-z.]{0,20}") {
        let schema = MetadataSchema::builtin();
        let doc = json!({
            "profile": "light",
            "name": name,
            "identifier": "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "version": version,
        });
        let result = SidecarValidator::new(&schema).validate(&doc.to_string());
        prop_assert!(result.is_ok(), "{:?}", result);
    }

    /// PROPERTY: dropping any light field reports exactly that field.
    #[test]
    fn property_missing_light_field_is_named(
        field in prop::sample::select(vec!["name", "identifier", "version"])
    ) {
        let schema = MetadataSchema::builtin();
        let mut doc = json!({
            "profile": "light",
            "name": "core.router.network.c",
            "identifier": "https://example.org/r/1",
            "version": "1.0.0",
        });
        doc.as_object_mut().unwrap().remove(field);

        let violations = SidecarValidator::new(&schema)
            .validate(&doc.to_string())
            .unwrap_err();
        let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
        prop_assert_eq!(reasons, vec![format!("missing_required_field:{}", field)]);
    }
}
