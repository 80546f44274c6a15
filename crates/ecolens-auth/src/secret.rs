//! Shared secret provisioning
//!
//! The key is an immutable byte sequence established once and read for the
//! lifetime of the process. Providers hand out a borrow; nothing here copies
//! the key or exposes a way to replace it.

use std::fmt;

use crate::error::SignerError;

/// Source of the shared HMAC key.
///
/// # Invariants
///
/// - `secret()` returns the identical bytes on every call
/// - The returned slice is never empty
/// - Implementations are read-only after construction, so concurrent readers
///   need no synchronization
pub trait SecretProvider: Send + Sync {
    /// The shared key.
    fn secret(&self) -> &[u8];
}

/// Secret embedded into the binary at build time.
#[derive(Clone, Copy)]
pub struct StaticSecret {
    bytes: &'static [u8],
}

impl StaticSecret {
    /// Wrap a `'static` key, rejecting an empty one.
    pub fn new(bytes: &'static [u8]) -> Result<Self, SignerError> {
        if bytes.is_empty() {
            return Err(SignerError::EmptySecret);
        }
        Ok(Self { bytes })
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an empty secret cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl SecretProvider for StaticSecret {
    fn secret(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Debug for StaticSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSecret").field("len", &self.bytes.len()).finish_non_exhaustive()
    }
}

impl<P: SecretProvider + ?Sized> SecretProvider for &P {
    fn secret(&self) -> &[u8] {
        (**self).secret()
    }
}
