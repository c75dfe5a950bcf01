//! Fuzz target: review payload normalization.
//!
//! Feeds arbitrary bytes through the JSON parser and, for object
//! payloads, through `Review::from_payload`. Errors are expected and
//! fine; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use savor_core::Review;

fuzz_target!(|data: &[u8]| {
    let Ok(serde_json::Value::Object(payload)) = serde_json::from_slice(data) else {
        return;
    };

    if let Ok(review) = Review::from_payload(payload) {
        // rating/comment must never leak into meta.
        assert!(!review.meta.contains_key("rating"));
        assert!(!review.meta.contains_key("comment"));
        // A normalized record always serializes.
        let _ = serde_json::to_string(&review).expect("review serialization must not fail");
    }
});
