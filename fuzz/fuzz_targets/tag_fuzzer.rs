//! Fuzz target for request tag computation
//!
//! Tests the signing pipeline under adversarial keys and messages.
//!
//! # Strategy
//!
//! - Arbitrary secrets (single byte, block-sized, larger than a block)
//! - Arbitrary message bytes, including empty and non-UTF-8
//! - Missing messages through the boundary-facing entry point
//!
//! # Invariants
//!
//! - Signing is deterministic (same key and message → same tag)
//! - Every tag is 64 lowercase hex characters
//! - Decoding a tag yields the MAC engine's digest
//! - A missing message always fails without panicking

#![no_main]

use arbitrary::Arbitrary;
use ecolens_auth::{compute_mac, to_hex, SecretProvider, Signer, SignerError, Tag, TAG_LEN};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct TagScenario {
    /// Shared secret (variable length)
    secret: Secret,
    /// Message bytes to sign
    message: Vec<u8>,
    /// Whether to route the message through the string entry point
    as_text: bool,
}

#[derive(Debug, Clone, Arbitrary)]
enum Secret {
    Byte(u8),
    Block([u8; 64]),
    Oversized([u8; 100]),
    Arbitrary(Vec<u8>),
}

impl Secret {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            Secret::Byte(b) => vec![b],
            Secret::Block(b) => b.to_vec(),
            Secret::Oversized(b) => b.to_vec(),
            Secret::Arbitrary(b) if b.is_empty() => vec![0],
            Secret::Arbitrary(b) => b,
        }
    }
}

struct FuzzSecret(Vec<u8>);

impl SecretProvider for FuzzSecret {
    fn secret(&self) -> &[u8] {
        &self.0
    }
}

fuzz_target!(|scenario: TagScenario| {
    let key = scenario.secret.into_bytes();
    let signer = Signer::new(FuzzSecret(key.clone()));

    // INVARIANT 1: Missing message fails cleanly
    assert_eq!(signer.calculate_tag(None), Err(SignerError::MissingMessage));

    let tag = if scenario.as_text {
        let text = String::from_utf8_lossy(&scenario.message).into_owned();
        let tag = signer.calculate_tag(Some(text.as_str())).expect("present message must sign");
        assert_eq!(tag, signer.sign(text.as_bytes()), "str and byte paths must agree");
        tag
    } else {
        signer.sign(&scenario.message)
    };

    // INVARIANT 2: Tag shape
    assert_eq!(tag.as_str().len(), TAG_LEN, "tag must be 64 characters");
    assert!(
        tag.as_str().bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)),
        "tag must be lowercase hex"
    );

    // INVARIANT 3: Determinism
    let again = if scenario.as_text {
        let text = String::from_utf8_lossy(&scenario.message).into_owned();
        signer.sign(text.as_bytes())
    } else {
        signer.sign(&scenario.message)
    };
    assert_eq!(tag, again, "signing must be deterministic");

    // INVARIANT 4: Decoding yields the MAC digest
    if !scenario.as_text {
        assert_eq!(tag.to_digest(), compute_mac(&key, &scenario.message));
    }
    assert_eq!(to_hex(&tag.to_digest()), tag.as_str());

    // INVARIANT 5: Parsing the rendered text reproduces the tag
    let reparsed: Tag = tag.as_str().parse().expect("rendered tag must parse");
    assert_eq!(reparsed, tag);
});
