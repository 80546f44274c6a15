//! Boundary error types.

use ecolens_auth::SignerError;
use thiserror::Error;

/// Errors raised while servicing a foreign call.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Input was rejected by the signer (null or unreadable message).
    ///
    /// Recoverable: the call returns `null` and the process keeps serving.
    #[error(transparent)]
    Signer(#[from] SignerError),

    /// The JVM could not hand back the result string.
    ///
    /// Fatal for this call: surfaced as a Java exception, never as a partial
    /// tag.
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),
}

impl BoundaryError {
    /// Returns true if the caller should see an exception rather than a
    /// plain `null`.
    pub fn raises_exception(&self) -> bool {
        match self {
            Self::Signer(_) => false,
            Self::Jni(_) => true,
        }
    }
}
