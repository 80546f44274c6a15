//! Hex-rendered request tags

use std::{fmt, str::FromStr};

use crate::{
    encode::to_hex,
    error::SignerError,
    mac::DIGEST_SIZE,
};

/// Length of a rendered tag in characters
pub const TAG_LEN: usize = DIGEST_SIZE * 2;

/// A 64-character lowercase hex HMAC-SHA256 tag.
///
/// Always exactly [`TAG_LEN`] characters from `0-9a-f`; decoding yields the
/// original digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Render a digest.
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Self {
        Self(to_hex(digest))
    }

    /// The hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hand ownership of the hex text to the caller.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode back to the raw digest bytes.
    pub fn to_digest(&self) -> [u8; DIGEST_SIZE] {
        let mut digest = [0u8; DIGEST_SIZE];
        let Ok(()) = hex::decode_to_slice(&self.0, &mut digest) else {
            unreachable!("tag is always 64 lowercase hex characters");
        };
        digest
    }
}

impl FromStr for Tag {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != TAG_LEN {
            return Err(SignerError::InvalidTag {
                reason: format!("expected {TAG_LEN} characters, got {}", s.len()),
            });
        }
        if let Some(position) =
            s.bytes().position(|c| !(c.is_ascii_digit() || (b'a'..=b'f').contains(&c)))
        {
            return Err(SignerError::InvalidTag {
                reason: format!("non lowercase hex character at position {position}"),
            });
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}
