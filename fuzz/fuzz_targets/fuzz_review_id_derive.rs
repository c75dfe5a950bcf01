//! Fuzz target: review identifier derivation.
//!
//! Verifies that `ReviewId::derive` never panics on arbitrary input and
//! always produces an id that re-validates as a 64-digit hex string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use savor_core::ReviewId;

fuzz_target!(|data: &[u8]| {
    let id = ReviewId::derive(data);
    let hex = id.to_string();
    assert_eq!(hex.len(), 64, "SHA-256 hex must always be 64 chars");
    assert!(
        hex.bytes().all(|b| b.is_ascii_hexdigit()),
        "SHA-256 hex must contain only hex digits"
    );
    assert!(ReviewId::parse(hex).is_ok(), "derived id must re-validate");
});
