//! Person identifier (GitHub handle of a director, coordinator, or guest)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Case-normalized person identifier
///
/// Normalization lowercases, trims whitespace, and drops a leading `@`, so
/// `@JaneDoe` and `janedoe` refer to the same person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    /// Normalize a raw handle; returns `None` when nothing is left
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let handle = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
        if handle.is_empty() {
            None
        } else {
            Some(Self(handle.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PersonId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).ok_or_else(|| serde::de::Error::custom("empty person identifier"))
    }
}
