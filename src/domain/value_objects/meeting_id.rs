//! Meeting identifier value object
//!
//! A stable, content-derived identifier for "the same logical meeting" across
//! renames. It is the SHA-256 of the meeting's placeholder name (`meeting03`)
//! at the time it was first minted, persisted in `syllabus.yml` and in the
//! marker file of the meeting's directory.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Prefix every placeholder name starts with
pub const PLACEHOLDER_PREFIX: &str = "meeting";

/// Placeholder name for the meeting at `index` (0-based), e.g. `meeting03`
pub fn placeholder_name(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index:02}")
}

/// Whether `name` looks like a placeholder produced by [`placeholder_name`]
pub fn is_placeholder_name(name: &str) -> bool {
    name.strip_prefix(PLACEHOLDER_PREFIX)
        .is_some_and(|digits| digits.len() >= 2 && digits.chars().all(|c| c.is_ascii_digit()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid meeting id '{0}': expected 64 hex characters")]
pub struct MeetingIdError(pub String);

/// Meeting identifier (lowercase hex SHA-256 digest)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetingId(String);

impl MeetingId {
    /// Hex length of a SHA-256 digest
    pub const LEN: usize = 64;

    /// Mint the identifier for a placeholder name
    pub fn from_placeholder(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        Self(format!("{digest:x}"))
    }

    /// Parse a persisted identifier (tolerates surrounding whitespace and a `sha256:` prefix)
    pub fn parse(raw: &str) -> Result<Self, MeetingIdError> {
        let trimmed = raw.trim();
        let hex = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);
        if hex.len() != Self::LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MeetingIdError(raw.to_string()));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight hex characters, for display
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MeetingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for MeetingId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MeetingId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
