//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handlers never read process-wide environment variables.

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_url: String,
    max_connections: u32,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if the database URL is blank or the pool size is zero.
    pub fn new(database_url: String, max_connections: u32) -> CoreResult<Self> {
        if database_url.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "database_url cannot be empty".into(),
            ));
        }
        if max_connections == 0 {
            return Err(CoreError::InvalidInput(
                "max_connections must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

/// Resolve the database URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DATABASE_URL`].
pub fn database_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
}

/// Parse the pool size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_CONNECTIONS`].
pub fn max_connections_from_env_value(value: Option<String>) -> CoreResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(v) => v.parse::<u32>().map_err(|_| {
            CoreError::InvalidInput(format!("invalid max connections value: {v}"))
        }),
    }
}
