//! Fuzz target: subject identifier validation.
//!
//! Verifies that `SubjectId::parse` never panics on arbitrary UTF-8 and
//! that its verdict always agrees with the strict character/length rules.

#![no_main]

use libfuzzer_sys::fuzz_target;
use savor_core::SubjectId;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let all_hex = !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit());
    match SubjectId::parse(s) {
        Ok(id) => {
            assert!(all_hex, "accepted a non-hex string: {s:?}");
            assert_eq!(id.as_str(), s, "validated string must be unchanged");
            assert_eq!(id.as_str().len(), 64);
        }
        Err(_) => {
            assert!(!(all_hex && s.len() == 64), "rejected a valid hex64: {s:?}");
        }
    }
});
