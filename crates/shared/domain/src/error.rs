//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (persistence, configuration).

use thiserror::Error;

use crate::constants::NULL_CREDENTIALS_MESSAGE;
use crate::user::User;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was missing or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// Two users share the same id where a unique key is required
    #[error("Duplicate key {id} (attempted merging values {existing} and {incoming})")]
    DuplicateKey {
        id: i32,
        existing: Box<User>,
        incoming: Box<User>,
    },
}

impl DomainError {
    /// Invalid-argument error raised when login credentials are unset
    pub fn null_credentials() -> Self {
        DomainError::InvalidArgument(NULL_CREDENTIALS_MESSAGE.to_string())
    }

    /// Create a duplicate-key error for two users sharing `existing.id()`
    pub fn duplicate_key(existing: &User, incoming: &User) -> Self {
        DomainError::DuplicateKey {
            id: existing.id(),
            existing: Box::new(existing.clone()),
            incoming: Box::new(incoming.clone()),
        }
    }
}
