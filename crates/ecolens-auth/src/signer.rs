//! Boundary-facing signing entry point
//!
//! [`Signer`] ties a [`SecretProvider`] to the MAC engine and the hex
//! encoder. Calls are stateless: the message is borrowed for the duration of
//! one call, the digest lives in a zeroized buffer, and only the rendered
//! [`Tag`] is handed back.

use std::fmt;

use zeroize::Zeroizing;

use crate::{
    error::SignerError,
    mac::compute_mac,
    secret::SecretProvider,
    tag::Tag,
};

/// Computes request tags under one shared secret.
///
/// Holds no mutable state, so a single instance can be shared across
/// threads and called concurrently.
#[derive(Clone)]
pub struct Signer<P> {
    provider: P,
}

impl<P: SecretProvider> Signer<P> {
    /// Create a signer reading its key from `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Tag an arbitrary byte message.
    pub fn sign(&self, message: &[u8]) -> Tag {
        let digest = Zeroizing::new(compute_mac(self.provider.secret(), message));
        Tag::from_digest(&digest)
    }

    /// Tag a message arriving from a foreign caller.
    ///
    /// `None` models a null reference and fails without touching the MAC
    /// engine. The failure is local to this call.
    pub fn calculate_tag(&self, message: Option<&str>) -> Result<Tag, SignerError> {
        let Some(message) = message else {
            tracing::debug!("rejecting missing message");
            return Err(SignerError::MissingMessage);
        };

        let tag = self.sign(message.as_bytes());
        tracing::trace!(message_len = message.len(), "computed request tag");
        Ok(tag)
    }
}

impl<P> fmt::Debug for Signer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}
