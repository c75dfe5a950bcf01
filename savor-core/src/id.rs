use std::fmt::{self, Write as _};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Checks that a path segment is a strict 64-digit hexadecimal string.
///
/// Stricter than a bare base-16 parse: signs, `0x` prefixes, and
/// whitespace are rejected along with anything else outside
/// `[0-9a-fA-F]`. An empty string fails the character check, not the
/// length check.
fn ensure_hex64(value: &str) -> Result<(), CoreError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CoreError::NotHexadecimal { value: value.to_owned() });
    }
    if value.len() != 64 {
        return Err(CoreError::WrongLength);
    }
    Ok(())
}

/// Identifies the external subject being reviewed: a 64-digit hex string.
///
/// The string is stored exactly as submitted. Mixed-case spellings of the
/// same number address distinct subjects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubjectId(String);

impl SubjectId {
    /// Validates a path segment as a subject identifier.
    ///
    /// # Errors
    /// Returns [`CoreError::NotHexadecimal`] if any character is not a hex
    /// digit, or [`CoreError::WrongLength`] if the length is not exactly 64.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        ensure_hex64(&value)?;
        Ok(Self(value))
    }

    /// Returns the validated hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a review: the SHA-256 hex digest of the bytes that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReviewId(String);

impl ReviewId {
    /// Validates a path segment as a review identifier.
    ///
    /// Same rules as [`SubjectId::parse`]; a client may spell the digest in
    /// either case when fetching, and the raw spelling is used for lookup.
    ///
    /// # Errors
    /// Returns [`CoreError::NotHexadecimal`] if any character is not a hex
    /// digit, or [`CoreError::WrongLength`] if the length is not exactly 64.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        ensure_hex64(&value)?;
        Ok(Self(value))
    }

    /// Derives the identifier for a write payload.
    ///
    /// Hashes the exact bytes received on the wire, before any JSON
    /// parsing, so that key order and whitespace in the body take part in
    /// the identity. Identical byte sequences always derive the same id.
    #[must_use]
    pub fn derive(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        let mut hex = String::with_capacity(64);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }

    /// Returns the validated hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the owned hex string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
