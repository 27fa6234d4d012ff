//! Domain-specific newtypes for workspace names
//!
//! Declarations and bindings share one name type so the two sides can be
//! compared directly. Uses `Arc<str>` for O(1) cloning.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::sync::Arc;

// Helper module for Arc<str> serialization
mod arc_str_serde {
    use super::{Arc, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(arc: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(arc)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| Arc::from(s.as_str()))
    }
}

/// Workspace name, as written on a declaration or a binding
///
/// Ordering is byte-wise on the underlying string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceName(#[serde(with = "arc_str_serde")] Arc<str>);

impl WorkspaceName {
    /// Create a new workspace name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Get the workspace name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for WorkspaceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkspaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkspaceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WorkspaceName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
