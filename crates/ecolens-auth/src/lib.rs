//! EcoLens Request Signing
//!
//! Keyed integrity tags for outbound requests. A tag is
//! `HMAC-SHA256(secret, message)` rendered as 64 lowercase hex characters;
//! the remote counterpart recomputes it with the same shared secret. Pure
//! functions with deterministic outputs, no I/O and no cross-call state.
//!
//! # Pipeline
//!
//! ```text
//! Caller message (borrowed)
//!        │
//!        ▼
//! SecretProvider → shared key (process lifetime, read-only)
//!        │
//!        ▼
//! HMAC-SHA256 → 32-byte digest (zeroized after use)
//!        │
//!        ▼
//! Hex encoding → Tag (64 chars, owned by caller)
//! ```
//!
//! # Security
//!
//! - The key never leaves its provider; it is not logged, serialized or
//!   rendered by `Debug`
//! - A missing message fails the call before the MAC engine runs
//! - An empty secret is rejected at construction, never at signing time
//! - An embedded secret is recoverable from the binary; this crate does not
//!   try to hide it

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod encode;
pub mod error;
pub mod mac;
pub mod secret;
pub mod signer;
pub mod tag;

pub use encode::to_hex;
pub use error::SignerError;
pub use mac::{DIGEST_SIZE, compute_mac};
pub use secret::{SecretProvider, StaticSecret};
pub use signer::Signer;
pub use tag::{TAG_LEN, Tag};
