#![no_main]

use libfuzzer_sys::fuzz_target;
use nomen::domain::services::{declared_name, SidecarValidator};
use nomen::MetadataSchema;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let schema = MetadataSchema::builtin();
        let _ = SidecarValidator::new(&schema).validate(text);
        let _ = declared_name(text);
    }
});
