//! PostgreSQL connection pool management

use std::time::Duration;

use jobs_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// SQL migrations embedded into the binary at compile time
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool tuning that is not part of the deployment configuration
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool with default timeouts
///
/// # Errors
/// Returns an error if the database cannot be reached
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, &PoolOptions::default()).await
}

/// Create a new PostgreSQL connection pool
///
/// # Errors
/// Returns an error if the database cannot be reached
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    options: &PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(options.acquire_timeout)
        .idle_timeout(options.idle_timeout)
        .max_lifetime(options.max_lifetime)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool established"
    );
    Ok(pool)
}

/// Apply pending schema migrations
///
/// # Errors
/// Returns an error if a migration fails or the applied history diverges
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    info!(count = MIGRATOR.iter().count(), "Database migrations applied");
    Ok(())
}
