//! User domain value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable user record.
///
/// Equality covers all three fields. The constructor performs no validation;
/// empty names and passwords are accepted as-is.
///
/// The password never leaves the process: it is skipped when serializing and
/// redacted in `Display` and `Debug`. Deserializing serialized output yields a
/// user with an empty password.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: i32,
    name: String,
    #[serde(skip_serializing, default)]
    password: String,
}

impl User {
    /// Create a user from its three fields
    pub fn of(id: i32, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check whether both credentials match exactly (case-sensitive)
    pub fn matches(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name={}, password=[REDACTED])", self.id, self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
