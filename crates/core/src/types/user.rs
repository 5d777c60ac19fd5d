//! User record and mutation payloads.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user record as held by the record store.
///
/// Serializes to the GraphQL `User` shape: `{"id": .., "name": .., "email": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name (non-empty).
    pub name: String,
    /// Email address (non-empty).
    pub email: String,
}

impl User {
    /// Apply a partial patch, overwriting only the supplied fields.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update for a user.
///
/// A field left as `None` keeps its stored value. Empty strings are treated
/// the same as `None` by [`UserPatch::new`], so a patch can never blank out a
/// required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Build a patch, dropping empty values.
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
        }
    }

    /// Patch that only renames.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), None)
    }

    /// Patch that only changes the email.
    #[must_use]
    pub fn email(email: impl Into<String>) -> Self {
        Self::new(None, Some(email.into()))
    }

    /// Returns true if applying this patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bob() -> User {
        User {
            id: UserId::new("2"),
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        }
    }

    #[test]
    fn test_apply_name_only_keeps_email() {
        let mut user = bob();
        user.apply(UserPatch::name("Bobby"));
        assert_eq!(user.name, "Bobby");
        assert_eq!(user.email, "bob@example.com");
    }

    #[test]
    fn test_apply_email_only_keeps_name() {
        let mut user = bob();
        user.apply(UserPatch::email("robert@example.com"));
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "robert@example.com");
    }

    #[test]
    fn test_empty_strings_are_not_supplied() {
        let patch = UserPatch::new(Some(String::new()), Some(String::new()));
        assert!(patch.is_empty());

        let mut user = bob();
        user.apply(patch);
        assert_eq!(user, bob());
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_value(bob()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "2", "name": "Bob", "email": "bob@example.com"})
        );
    }
}
