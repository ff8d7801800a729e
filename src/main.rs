use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use clinicals_core::config::{database_url_from_env_value, max_connections_from_env_value};
use clinicals_core::{CoreConfig, Database};

/// Main entry point for the clinicals application
///
/// Resolves configuration once, applies pending migrations and serves the REST API until
/// Ctrl-C.
///
/// # Environment Variables
/// - `CLINICALS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `DATABASE_URL`: relational store URL (default: "sqlite://clinicals.db?mode=rwc")
/// - `CLINICALS_DB_MAX_CONNECTIONS`: connection pool size (default: 5)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the database cannot be opened or migrated,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinicals_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("clinicals_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("CLINICALS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let database_url = database_url_from_env_value(std::env::var("DATABASE_URL").ok());
    let max_connections =
        max_connections_from_env_value(std::env::var("CLINICALS_DB_MAX_CONNECTIONS").ok())?;

    let cfg = CoreConfig::new(database_url, max_connections)?;

    tracing::info!("++ Opening database {}", cfg.database_url());
    let db = Database::connect(&cfg).await?;
    db.run_migrations().await?;

    let app = api_rest::router(AppState::new(&db));

    tracing::info!("++ Starting clinicals REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Clinicals REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
