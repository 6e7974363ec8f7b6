//! Service layer for directory use cases.

mod user_directory;

pub use user_directory::UserDirectory;
