//! Opaque user identifiers.
//!
//! IDs are issued by the record store and travel over GraphQL as `ID!`
//! (a string). Clients never derive meaning from their contents.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user record.
///
/// Unique within a store and immutable once assigned. Compared by exact
/// string equality.
///
/// # Example
///
/// ```rust
/// # use roster_core::UserId;
/// let id = UserId::new("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id, UserId::from("1".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create an ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
