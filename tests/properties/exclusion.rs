//! Property tests for the exclusion policy.

use proptest::prelude::*;

use nomen::domain::policies::{Decision, Mode};
use nomen::domain::value_objects::RelPath;
use nomen::ExclusionPolicy;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: in tree mode anything below a denylisted directory is
    /// skipped, even a name the grammar would accept.
    #[test]
    fn property_denylisted_directory_always_skips(
        dir in prop::sample::select(vec!["tools", "docs", "archive", "registry", ".git", "node_modules"]),
        prefix in proptest::collection::vec(segment(), 0..=2),
        suffix in proptest::collection::vec(segment(), 0..=2),
    ) {
        let policy = ExclusionPolicy::defaults();
        let mut parts = prefix.clone();
        parts.push(dir.to_string());
        parts.extend(suffix);
        parts.push("core.router.network.c".to_string());
        let path = RelPath::from(parts.join("/").as_str());

        let decision = policy.decide(&path, Mode::Tree);
        prop_assert!(matches!(decision, Decision::Skip(_)), "{:?}", decision);
        prop_assert!(!policy.should_validate(&path));
    }

    /// PROPERTY: dotfiles are skipped in both modes.
    #[test]
    fn property_dotfiles_skipped(name in segment(), mode in prop::sample::select(vec![Mode::Tree, Mode::FileList])) {
        let policy = ExclusionPolicy::defaults();
        let path = RelPath::from(format!("src/.{}", name).as_str());
        prop_assert!(matches!(policy.decide(&path, mode), Decision::Skip(_)));
    }
}
