//! User DAO contract and an in-memory implementation.

use std::collections::HashSet;
use std::sync::Mutex;

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence collaborator for dependency injection.
///
/// Errors are propagated unchanged by the directory.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserDao: Send + Sync {
    /// Delete the user with the given id, returning whether anything was removed
    fn delete(&self, id: i32) -> AppResult<bool>;
}

/// In-memory implementation of UserDao (for development/testing)
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    ids: Mutex<HashSet<i32>>,
}

impl InMemoryUserDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already knows the given ids
    pub fn with_ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().collect()),
        }
    }

    /// Register an id, returning `false` if it was already known
    pub fn insert(&self, id: i32) -> AppResult<bool> {
        let mut ids = self.lock()?;
        Ok(ids.insert(id))
    }

    pub fn contains(&self, id: i32) -> AppResult<bool> {
        Ok(self.lock()?.contains(&id))
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashSet<i32>>> {
        self.ids
            .lock()
            .map_err(|_| AppError::persistence("user store lock poisoned"))
    }
}

impl UserDao for InMemoryUserDao {
    fn delete(&self, id: i32) -> AppResult<bool> {
        let removed = self.lock()?.remove(&id);
        tracing::debug!(user_id = id, removed, "Deleted user from store");
        Ok(removed)
    }
}
