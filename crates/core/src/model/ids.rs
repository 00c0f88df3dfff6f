use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error type for parsing an ID from a string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} cannot be empty")]
pub struct IdError {
    kind: &'static str,
}

impl IdError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

fn non_empty(kind: &'static str, raw: &str) -> Result<String, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError { kind });
    }
    Ok(trimmed.to_owned())
}

/// Opaque identifier for a user account.
///
/// Fresh accounts receive a UUID v4; the progress store accepts any
/// non-empty value so it never depends on the account store.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the value is blank.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        non_empty("userId", raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a roadmap in the catalog, e.g. `frontend-dev`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoadmapId(String);

impl RoadmapId {
    /// Parses a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the value is blank.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        non_empty("roadmapId", raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoadmapId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for RoadmapId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<RoadmapId> for String {
    fn from(id: RoadmapId) -> Self {
        id.0
    }
}

impl FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for RoadmapId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Debug for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoadmapId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn generated_user_ids_are_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert_eq!(UserId::parse("  ").unwrap_err().kind(), "userId");
        assert_eq!(RoadmapId::parse("").unwrap_err().kind(), "roadmapId");
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: RoadmapId = " frontend-dev ".parse().unwrap();
        assert_eq!(id.as_str(), "frontend-dev");
    }

    #[test]
    fn roadmap_id_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(RoadmapId::parse("backend-dev").unwrap(), 3);
        assert_eq!(map.get("backend-dev"), Some(&3));
    }

    #[test]
    fn deserialize_rejects_blank_user_id() {
        let result = serde_json::from_str::<UserId>("\"\"");
        assert!(result.is_err());
    }
}
