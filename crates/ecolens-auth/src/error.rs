//! Error types for tag computation

use thiserror::Error;

/// Errors from signing operations.
///
/// Display strings never carry secret bytes or message contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// Secret provider was constructed from zero bytes
    #[error("shared secret is empty")]
    EmptySecret,

    /// Caller passed no message (null at the foreign boundary)
    #[error("message is missing")]
    MissingMessage,

    /// Message reference was present but could not be read
    #[error("message could not be read: {reason}")]
    UnreadableMessage {
        /// Why the boundary failed to read the message
        reason: String,
    },

    /// Text is not a well-formed tag
    #[error("invalid tag: {reason}")]
    InvalidTag {
        /// What was wrong with the text
        reason: String,
    },
}

impl SignerError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors are configuration problems; the process should not keep
    /// signing. Everything else fails a single call only.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::EmptySecret => true,

            Self::MissingMessage => false,
            Self::UnreadableMessage { .. } => false,
            Self::InvalidTag { .. } => false,
        }
    }
}
