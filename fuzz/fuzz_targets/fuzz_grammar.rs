#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Never panics; an accepted name re-parses to the same decomposition.
        // Mandatory segments ending in the sidecar suffix would be stripped again.
        if let Ok(parsed) = nomen::parse_name(name) {
            let rejoined = parsed.mandatory_segments();
            if rejoined.ends_with(nomen::domain::services::SIDECAR_SUFFIX) {
                return;
            }
            let again = nomen::parse_name(&rejoined).unwrap_or_else(|r| panic!("{rejoined}: {r}"));
            assert_eq!(again.domain, parsed.domain, "{rejoined}");
            assert_eq!(again.extension, parsed.extension, "{rejoined}");
        }
    }
});
