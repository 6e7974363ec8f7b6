//! User Directory Library
//!
//! An in-memory directory of [`User`](domain::User) records supporting add,
//! list, credential login and id-indexed conversion. Deletion is forwarded to
//! an injected [`UserDao`] collaborator.

pub mod config;
pub mod dao;
pub mod service;

pub use config::{ConflictPolicy, DirectoryConfig};
pub use dao::{InMemoryUserDao, UserDao};
pub use service::UserDirectory;

#[cfg(any(test, feature = "test-utils"))]
pub use dao::MockUserDao;
