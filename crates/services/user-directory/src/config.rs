//! User directory configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use common::{AppError, LogConfig};
use domain::{CONFLICT_POLICY_ENV, LOG_LEVEL_ENV, POLICY_FAIL_FAST, POLICY_LAST_WRITE_WINS};

/// How duplicate ids are handled when the directory is converted to an id map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Abort the conversion on the first duplicate id
    #[default]
    FailFast,
    /// Later users overwrite earlier ones sharing an id
    LastWriteWins,
}

impl FromStr for ConflictPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            POLICY_FAIL_FAST => Ok(ConflictPolicy::FailFast),
            POLICY_LAST_WRITE_WINS => Ok(ConflictPolicy::LastWriteWins),
            other => Err(AppError::config(format!("unknown conflict policy '{}'", other))),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::FailFast => write!(f, "{}", POLICY_FAIL_FAST),
            ConflictPolicy::LastWriteWins => write!(f, "{}", POLICY_LAST_WRITE_WINS),
        }
    }
}

/// User directory configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Duplicate-id handling for id-map conversion
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing or unknown policy falls back to fail-fast.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a key lookup shaped like the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let conflict_policy = match lookup(CONFLICT_POLICY_ENV) {
            Some(raw) => raw.trim().parse::<ConflictPolicy>().unwrap_or_else(|err: AppError| {
                tracing::warn!("{}, falling back to {}", err, ConflictPolicy::FailFast);
                ConflictPolicy::FailFast
            }),
            None => ConflictPolicy::default(),
        };

        let log = LogConfig {
            level: lookup(LOG_LEVEL_ENV).unwrap_or_else(|| LogConfig::default().level),
        };

        Self {
            conflict_policy,
            log,
        }
    }

    /// Configuration with the given conflict policy and default logging
    pub fn with_policy(conflict_policy: ConflictPolicy) -> Self {
        Self {
            conflict_policy,
            ..Self::default()
        }
    }
}
