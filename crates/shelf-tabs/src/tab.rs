//! Tab data structure
//!
//! A tab is an identifier plus an opaque payload. The strip never looks inside
//! the payload; the shell decides what a tab displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a tab, unique within the sequence that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab<P> {
    /// Unique identifier
    pub id: TabId,
    /// Display payload, opaque to the strip
    pub payload: P,
}

impl<P> Tab<P> {
    /// Create a tab with a freshly generated id
    pub fn new(payload: P) -> Self {
        Self {
            id: TabId::new(),
            payload,
        }
    }

    pub fn with_id(id: impl Into<TabId>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Tab::new(());
        let b = Tab::new(());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(a.id.as_str()).is_ok());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = TabId::from("docs");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"docs\"");
        assert_eq!(id.to_string(), "docs");
    }
}
