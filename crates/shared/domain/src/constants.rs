//! Domain-level constants.

// =============================================================================
// Login
// =============================================================================

/// Message carried by the invalid-argument error when login credentials are unset
pub const NULL_CREDENTIALS_MESSAGE: &str = "Username or password is null!";

// =============================================================================
// Configuration
// =============================================================================

/// Environment variable selecting the duplicate-id conflict policy
pub const CONFLICT_POLICY_ENV: &str = "USER_DIRECTORY_CONFLICT_POLICY";

/// Environment variable holding the fallback tracing filter
pub const LOG_LEVEL_ENV: &str = "USER_DIRECTORY_LOG_LEVEL";

/// Policy name: abort conversion on the first duplicate id
pub const POLICY_FAIL_FAST: &str = "fail-fast";

/// Policy name: later users overwrite earlier ones sharing an id
pub const POLICY_LAST_WRITE_WINS: &str = "last-write-wins";
