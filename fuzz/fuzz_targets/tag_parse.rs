//! Fuzz target for Tag parsing
//!
//! Arbitrary text must either parse into a well-formed tag or return an
//! error. Parsing should NEVER panic.

#![no_main]

use ecolens_auth::{Tag, TAG_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic; accepted text must survive a decode round-trip
    if let Ok(tag) = text.parse::<Tag>() {
        assert_eq!(text.len(), TAG_LEN);
        assert_eq!(Tag::from_digest(&tag.to_digest()).as_str(), text);
    }
});
