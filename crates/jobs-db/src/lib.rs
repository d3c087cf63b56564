//! # jobs-db
//!
//! Database layer implementing the repository port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the `Repository` trait
//! defined in `jobs-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Translation of driver errors into domain errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jobs_common::AppConfig;
//! use jobs_db::{create_pool, run_migrations, PgRepository};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolOptions};
pub use repositories::PgRepository;
