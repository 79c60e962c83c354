//! Identifier type for stored movies.
//!
//! A [`MovieId`] wraps the 12-byte ObjectId the document store assigns on
//! insert. At the JSON boundary it is always the 24-character hex string.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Length of the hex rendering of an ObjectId.
pub const MOVIE_ID_HEX_LEN: usize = 24;

/// Store-assigned identifier of a movie record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(ObjectId);

impl MovieId {
    /// Generate a fresh identifier (used by stores that assign ids locally).
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse an identifier taken from a request path.
    ///
    /// Rejects empty input, non-alphanumeric characters and anything that is
    /// not exactly 24 hex digits. Never falls back to a default id.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let invalid = |reason| CoreError::InvalidId {
            value: value.to_string(),
            reason,
        };

        if value.is_empty() {
            return Err(invalid("identifier is empty"));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("identifier must be alphanumeric"));
        }
        if value.len() != MOVIE_ID_HEX_LEN {
            return Err(invalid("identifier must be 24 hex characters"));
        }

        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| invalid("identifier must be 24 hex characters"))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for MovieId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<MovieId> for ObjectId {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl FromStr for MovieId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const VALID: &str = "5f1d7f8e9a1b2c3d4e5f6a7b";

    #[test]
    fn parse_accepts_hex_object_id() {
        let id = MovieId::parse(VALID).unwrap();
        assert_eq!(id.to_hex(), VALID);
        assert_eq!(id.to_string(), VALID);
    }

    #[test]
    fn parse_accepts_uppercase_hex() {
        let id = MovieId::parse(&VALID.to_uppercase()).unwrap();
        assert_eq!(id.to_hex(), VALID);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_matches!(
            MovieId::parse(""),
            Err(CoreError::InvalidId { reason: "identifier is empty", .. })
        );
    }

    #[test]
    fn parse_rejects_non_alphanumeric() {
        assert_matches!(
            MovieId::parse("5f1d7f8e9a1b-c3d4e5f6a7b"),
            Err(CoreError::InvalidId { reason: "identifier must be alphanumeric", .. })
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_matches!(MovieId::parse("abc123"), Err(CoreError::InvalidId { .. }));
        assert_matches!(
            MovieId::parse(&format!("{VALID}00")),
            Err(CoreError::InvalidId { .. })
        );
    }

    #[test]
    fn parse_rejects_alphanumeric_non_hex() {
        assert_matches!(
            MovieId::parse("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(CoreError::InvalidId { value, .. }) if value == "zzzzzzzzzzzzzzzzzzzzzzzz"
        );
    }

    #[test]
    fn serializes_as_plain_hex_string() {
        let id = MovieId::parse(VALID).unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(VALID));
    }

    #[test]
    fn deserialize_rejects_malformed_string() {
        let result: Result<MovieId, _> = serde_json::from_value(serde_json::json!("not-an-id"));
        assert!(result.is_err());
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(MovieId::new(), MovieId::new());
    }
}
