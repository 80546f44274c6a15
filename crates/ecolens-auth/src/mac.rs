//! HMAC-SHA256 over a shared key
//!
//! Padding, key pre-hashing for keys longer than the SHA-256 block, and the
//! inner/outer hash chain are all left to the `hmac` crate.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// Compute `HMAC-SHA256(key, message)`.
///
/// Deterministic and side-effect free. An empty message is valid input.
pub fn compute_mac(key: &[u8], message: &[u8]) -> [u8; DIGEST_SIZE] {
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        unreachable!("HMAC-SHA256 accepts any key size");
    };
    mac.update(message);
    let result = mac.finalize().into_bytes();

    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&result);
    digest
}
