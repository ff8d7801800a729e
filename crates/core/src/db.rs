//! Database connection pool and schema migrations.
//!
//! The pool is the only state shared between requests. Foreign-key enforcement is switched on
//! for every connection so that deleting a patient cascades to its clinical data.

use crate::config::CoreConfig;
use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::{CoreError, CoreResult};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Embedded migrations from `crates/core/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database connection pool
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool against the configured database URL.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDatabaseUrl` if the URL cannot be parsed, or
    /// `CoreError::Connect` if the first connection cannot be established.
    pub async fn connect(cfg: &CoreConfig) -> CoreResult<Self> {
        let options = SqliteConnectOptions::from_str(cfg.database_url())
            .map_err(CoreError::InvalidDatabaseUrl)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections())
            .connect_with(options)
            .await
            .map_err(CoreError::Connect)?;

        tracing::debug!("connected to {}", cfg.database_url());

        Ok(Self { pool })
    }

    /// Open a private in-memory database with migrations applied.
    ///
    /// The pool holds a single connection that never expires, since an in-memory SQLite
    /// database lives only as long as its connection.
    pub async fn connect_in_memory() -> CoreResult<Self> {
        let options = SqliteConnectOptions::from_str(IN_MEMORY_DATABASE_URL)
            .map_err(CoreError::InvalidDatabaseUrl)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(CoreError::Connect)?;

        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Get a handle to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply any pending migrations.
    pub async fn run_migrations(&self) -> CoreResult<()> {
        MIGRATOR.run(&self.pool).await.map_err(CoreError::Migrate)
    }
}
