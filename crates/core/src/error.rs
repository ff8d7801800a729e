#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid database url: {0}")]
    InvalidDatabaseUrl(sqlx::Error),
    #[error("failed to connect to database: {0}")]
    Connect(sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(sqlx::migrate::MigrateError),
    #[error("database query failed: {0}")]
    Query(sqlx::Error),
    #[error("patient {0} not found")]
    PatientNotFound(i32),
    #[error("clinical data {0} not found")]
    ClinicalDataNotFound(i32),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
