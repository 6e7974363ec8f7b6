//! Persistence collaborators for the directory.

mod user_dao;

pub use user_dao::{InMemoryUserDao, UserDao};

#[cfg(any(test, feature = "test-utils"))]
pub use user_dao::MockUserDao;
