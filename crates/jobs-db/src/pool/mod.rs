//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_with_options, run_migrations, PoolOptions};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
