//! Constants used throughout the clinicals core crate.

/// Database URL used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://clinicals.db?mode=rwc";

/// Pool size used when `CLINICALS_DB_MAX_CONNECTIONS` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// URL of a private in-memory database.
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

