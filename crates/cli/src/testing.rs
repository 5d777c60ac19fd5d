//! In-memory [`UserDirectory`] for tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use roster_core::{NewUser, User, UserId, UserPatch};

use crate::directory::{ClientError, UserDirectory};

/// In-memory directory with request counting and failure injection.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    state: Mutex<FakeState>,
    requests: AtomicUsize,
}

#[derive(Debug, Default)]
struct FakeState {
    users: Vec<User>,
    issued: u64,
    fail_after: Option<usize>,
}

impl FakeDirectory {
    pub fn with_users(names: &[&str]) -> Self {
        let directory = Self::default();
        {
            let mut state = directory.state.lock().unwrap();
            for name in names {
                state.issued += 1;
                let id = state.issued.to_string();
                state.users.push(User {
                    id: UserId::new(id),
                    name: (*name).to_string(),
                    email: format!("{}@x", name.to_lowercase()),
                });
            }
        }
        directory
    }

    /// Fail every request once `n` more have succeeded.
    pub fn fail_after(&self, n: usize) {
        self.state.lock().unwrap().fail_after = Some(n);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn remove_behind_the_back(&self, id: &str) {
        self.state.lock().unwrap().users.retain(|u| u.id.as_str() != id);
    }

    fn check(&self) -> Result<std::sync::MutexGuard<'_, FakeState>, ClientError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        match state.fail_after {
            Some(0) => Err(ClientError::Status {
                status: 503,
                message: "unavailable".to_string(),
            }),
            Some(n) => {
                state.fail_after = Some(n - 1);
                Ok(state)
            }
            None => Ok(state),
        }
    }
}

impl UserDirectory for FakeDirectory {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        Ok(self.check()?.users.clone())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let mut state = self.check()?;
        state.issued += 1;
        let user = User {
            id: UserId::new(state.issued.to_string()),
            name: user.name.clone(),
            email: user.email.clone(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, ClientError> {
        let mut state = self.check()?;
        Ok(state.users.iter_mut().find(|u| &u.id == id).map(|user| {
            user.apply(patch.clone());
            user.clone()
        }))
    }

    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, ClientError> {
        let mut state = self.check()?;
        let index = state.users.iter().position(|u| &u.id == id);
        Ok(index.map(|i| state.users.remove(i)))
    }
}
