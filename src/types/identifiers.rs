use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a single material record. The only lookup and delete key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(String);

impl MaterialId {
    /// Wrap an externally generated identity as-is.
    pub fn new(id: impl Into<String>) -> Self {
        MaterialId(id.into())
    }

    /// Fresh random identity (UUID v4, hyphenated).
    pub fn generate() -> Self {
        MaterialId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MaterialId {
    fn from(s: &str) -> Self {
        MaterialId(s.to_string())
    }
}

/// Key into the externally supplied subject catalog.
/// Never checked against the catalog by the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        SubjectId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        SubjectId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = MaterialId::generate();
        let b = MaterialId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&SubjectId::new("math")).unwrap();
        assert_eq!(json, "\"math\"");
    }
}
