//! In-memory user record store.
//!
//! The store is the only writer of user records. It is owned by
//! [`AppState`](crate::state::AppState) behind a mutex and every operation is
//! synchronous.
//!
//! IDs come from a counter of creates ever performed, never from the current
//! number of records, so an ID is never handed out twice even after deletes.

use roster_core::{NewUser, User, UserId, UserPatch};
use tracing::{debug, info};

/// Authoritative collection of user records, in insertion order.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    issued: u64,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed`, created in order.
    #[must_use]
    pub fn seeded(seed: impl IntoIterator<Item = NewUser>) -> Self {
        let mut store = Self::new();
        for user in seed {
            store.create(user);
        }
        store
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Append a new record under a freshly issued ID.
    ///
    /// Fields are stored as given; required-field checks belong to the caller.
    pub fn create(&mut self, new: NewUser) -> User {
        self.issued += 1;
        let user = User {
            id: UserId::new(self.issued.to_string()),
            name: new.name,
            email: new.email,
        };
        self.users.push(user.clone());

        info!(user_id = %user.id, "user created");
        user
    }

    /// Overwrite the supplied fields of an existing record.
    ///
    /// Returns `None` without touching the collection if `id` is unknown.
    pub fn update(&mut self, id: &UserId, patch: UserPatch) -> Option<User> {
        let Some(user) = self.users.iter_mut().find(|user| &user.id == id) else {
            debug!(user_id = %id, "update of unknown user");
            return None;
        };
        user.apply(patch);

        info!(user_id = %id, "user updated");
        Some(user.clone())
    }

    /// Remove a record, returning its last value.
    ///
    /// Returns `None` without touching the collection if `id` is unknown.
    pub fn delete(&mut self, id: &UserId) -> Option<User> {
        let Some(index) = self.users.iter().position(|user| &user.id == id) else {
            debug!(user_id = %id, "delete of unknown user");
            return None;
        };
        let user = self.users.remove(index);

        info!(user_id = %id, "user deleted");
        Some(user)
    }
}
