//! # gourmet-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `gourmet-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations, applied at runtime from `migrations/`
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gourmet_db::{create_pool, run_migrations, PgPostRepository, PoolConfig};
//! use gourmet_core::traits::PostRepository;
//!
//! async fn example(config: &gourmet_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{run_migrations, run_migrations_from, MIGRATIONS_DIR};
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgCategoryRepository, PgPostRepository, PgProfileRepository, PgRestaurantRepository,
    PgUserRepository,
};
