//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::store::UserStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the single record
/// store; all access goes through [`AppState::with_store`], which holds the
/// lock for exactly one synchronous closure.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Mutex<UserStore>,
}

impl AppState {
    /// Create application state with a store seeded per `config`.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::from_store(UserStore::seeded(config.seed_users()))
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn from_store(store: UserStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Mutex::new(store),
            }),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous holder of the lock panicked.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut UserStore) -> T) -> Result<T, AppError> {
        let mut store = self
            .inner
            .store
            .lock()
            .map_err(|_| {
                tracing::error!("Record store lock poisoned");
                AppError::Internal("store lock poisoned".to_string())
            })?;
        Ok(f(&mut store))
    }
}
