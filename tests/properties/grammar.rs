//! Property tests for the naming grammar.

use proptest::prelude::*;

use nomen::domain::value_objects::{Layer, LayerSpelling};
use nomen::parse_name;

/// A lowercase token that starts with a letter and has no edge hyphens
fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,7}(-[a-z0-9]{1,4})?").unwrap()
}

/// An extension that never reads as a `v<digits>` version marker
fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-uw-z0-9][a-z0-9]{0,4}").unwrap()
}

/// A token that may follow the mandatory segments: a Target or a Version
fn trailing_token() -> impl Strategy<Value = String> {
    prop_oneof![word(), (1u32..20).prop_map(|n| format!("v{}", n))]
}

fn layer_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "core",
        "interface",
        "logic",
        "application",
        "bones",
        "skins",
        "breath",
        "body",
    ])
}

fn valid_name() -> impl Strategy<Value = String> {
    (
        layer_token(),
        word(),
        proptest::collection::vec(word(), 1..=3),
        extension(),
    )
        .prop_map(|(layer, role, domain, ext)| {
            format!("{}.{}.{}.{}", layer, role, domain.join("."), ext)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the parser never panics, whatever the input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = parse_name(&s);
    }

    /// PROPERTY: generated well-formed names are accepted.
    #[test]
    fn property_well_formed_names_parse(name in valid_name()) {
        prop_assert!(parse_name(&name).is_ok(), "rejected {}", name);
    }

    /// PROPERTY: re-serializing the four mandatory segments is accepted again
    /// and yields the same decomposition.
    #[test]
    fn property_mandatory_segments_round_trip(name in valid_name()) {
        let first = parse_name(&name).unwrap();
        let rejoined = first.mandatory_segments();
        let second = parse_name(&rejoined).unwrap();

        prop_assert_eq!(second.layer, first.layer);
        prop_assert_eq!(second.layer_spelling, LayerSpelling::Canonical);
        prop_assert_eq!(&second.role, &first.role);
        prop_assert_eq!(&second.domain, &first.domain);
        prop_assert_eq!(&second.extension, &first.extension);
        prop_assert_eq!(second.mandatory_segments(), rejoined);
    }

    /// PROPERTY: whatever trails the mandatory segments, an accepted name
    /// re-parses from its mandatory segments to the same decomposition.
    #[test]
    fn property_accepted_names_decompose_stably(
        name in valid_name(),
        trailing in proptest::collection::vec(trailing_token(), 0..=3),
    ) {
        let mut full = name;
        for token in &trailing {
            full.push('.');
            full.push_str(token);
        }
        if let Ok(first) = parse_name(&full) {
            let second = parse_name(&first.mandatory_segments()).unwrap();
            prop_assert_eq!(&second.role, &first.role);
            prop_assert_eq!(&second.domain, &first.domain);
            prop_assert_eq!(&second.extension, &first.extension);
        } else {
            // A digit-led extension pushed into Domain, or two version markers
            let code = parse_name(&full).unwrap_err().code();
            prop_assert!(matches!(code, "leading_digit" | "ambiguous_extension"), "{}", code);
        }
    }

    /// PROPERTY: a sidecar name parses exactly like its source name.
    #[test]
    fn property_sidecar_suffix_is_transparent(name in valid_name()) {
        let source = parse_name(&name).unwrap();
        let sidecar = parse_name(&format!("{}.meta.json", name)).unwrap();
        prop_assert_eq!(source, sidecar);
    }

    /// PROPERTY: any uppercase letter is rejected.
    #[test]
    fn property_uppercase_rejected(name in valid_name(), index in any::<prop::sample::Index>()) {
        let chars: Vec<char> = name.chars().collect();
        let letters: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .collect();
        let at = letters[index.index(letters.len())];
        let mutated: String = chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i == at { c.to_ascii_uppercase() } else { *c })
            .collect();

        let rejection = parse_name(&mutated).unwrap_err();
        prop_assert_eq!(rejection.code(), "uppercase_character");
    }

    /// PROPERTY: fewer than four segments is always `too_few_segments`.
    #[test]
    fn property_short_names_rejected(tokens in proptest::collection::vec(word(), 1..=3)) {
        let rejection = parse_name(&tokens.join(".")).unwrap_err();
        prop_assert_eq!(rejection.code(), "too_few_segments");
    }
}

/// PROPERTY (exhaustive): every canonical name and its alias normalize to
/// the same layer.
#[test]
fn property_alias_and_canonical_normalize_identically() {
    for layer in Layer::ALL {
        let canonical = parse_name(&format!("{}.agent.analysis.py", layer.as_str())).unwrap();
        let alias = parse_name(&format!("{}.agent.analysis.py", layer.alias())).unwrap();

        assert_eq!(canonical.layer, layer);
        assert_eq!(alias.layer, layer);
        assert_eq!(canonical.layer_spelling, LayerSpelling::Canonical);
        assert_eq!(alias.layer_spelling, LayerSpelling::Alias);
        assert_eq!(canonical.mandatory_segments(), alias.mandatory_segments());
    }
}
