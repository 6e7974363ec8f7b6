//! User directory - Handles user-related business logic.
//!
//! Users are kept in insertion order. Mutation takes `&mut self`, so callers
//! sharing a directory across threads must serialize access themselves.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use common::{init_tracing, AppResult};
use domain::{DomainError, User};

use crate::config::{ConflictPolicy, DirectoryConfig};
use crate::dao::UserDao;

/// In-memory user directory with an injected persistence collaborator.
pub struct UserDirectory {
    users: Vec<User>,
    dao: Arc<dyn UserDao>,
    config: DirectoryConfig,
}

impl UserDirectory {
    /// Create an empty directory with default configuration
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self::with_config(dao, DirectoryConfig::default())
    }

    /// Create an empty directory configured from the environment.
    ///
    /// Installs the tracing subscriber at the configured log level unless one
    /// is already installed.
    pub fn from_env(dao: Arc<dyn UserDao>) -> Self {
        let config = DirectoryConfig::from_env();
        init_tracing(&config.log);
        Self::with_config(dao, config)
    }

    /// Create an empty directory with the given configuration
    pub fn with_config(dao: Arc<dyn UserDao>, config: DirectoryConfig) -> Self {
        Self {
            users: Vec::new(),
            dao,
            config,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// All users in insertion order.
    ///
    /// The returned slice is a read-only view of the live sequence.
    pub fn find_all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append users in the given order.
    ///
    /// Duplicate ids are accepted. Returns `true` if the directory changed,
    /// so an empty batch yields `false`.
    pub fn add<I>(&mut self, users: I) -> bool
    where
        I: IntoIterator<Item = User>,
    {
        let before = self.users.len();
        self.users.extend(users);
        let added = self.users.len() - before;

        tracing::debug!(added, total = self.users.len(), "Added users");
        added > 0
    }

    /// Find the first user matching both credentials exactly.
    ///
    /// Either credential being unset is rejected before any lookup.
    pub fn login(&self, name: Option<&str>, password: Option<&str>) -> AppResult<Option<&User>> {
        let (name, password) = match (name, password) {
            (Some(name), Some(password)) => (name, password),
            _ => {
                tracing::warn!("Login rejected: username or password is unset");
                return Err(DomainError::null_credentials().into());
            }
        };

        let user = self.users.iter().find(|user| user.matches(name, password));

        match user {
            Some(user) => tracing::debug!(user_id = user.id(), "Login succeeded"),
            None => tracing::debug!(user_name = name, "Login failed: no matching user"),
        }
        Ok(user)
    }

    /// Build a map from user id to user.
    ///
    /// Duplicate ids are resolved by the configured [`ConflictPolicy`].
    pub fn get_all_converted_by_id(&self) -> AppResult<HashMap<i32, User>> {
        let mut by_id = HashMap::with_capacity(self.users.len());

        for user in &self.users {
            match by_id.entry(user.id()) {
                Entry::Vacant(slot) => {
                    slot.insert(user.clone());
                }
                Entry::Occupied(mut slot) => match self.config.conflict_policy {
                    ConflictPolicy::FailFast => {
                        return Err(DomainError::duplicate_key(slot.get(), user).into());
                    }
                    ConflictPolicy::LastWriteWins => {
                        tracing::warn!(user_id = user.id(), "Duplicate id, keeping the later user");
                        slot.insert(user.clone());
                    }
                },
            }
        }

        Ok(by_id)
    }

    /// Forward a delete to the DAO and return its result unchanged.
    ///
    /// The in-memory sequence is not modified.
    pub fn delete(&self, id: i32) -> AppResult<bool> {
        let deleted = self.dao.delete(id)?;
        tracing::debug!(user_id = id, deleted, "Delete forwarded to DAO");
        Ok(deleted)
    }
}
