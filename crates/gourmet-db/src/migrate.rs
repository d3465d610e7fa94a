//! Runtime schema migrations
//!
//! SQL files under `migrations/` are applied in version order by the SQLx
//! migrator. Applied versions are tracked in `_sqlx_migrations`.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument};

/// Migration files in the source tree
///
/// This is an absolute path fixed at build time. Installed binaries that run
/// outside the checkout pass their own directory to `run_migrations_from`.
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration from `MIGRATIONS_DIR`
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, Path::new(MIGRATIONS_DIR)).await
}

/// Apply every pending migration found in `dir`
#[instrument(skip(pool))]
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;

    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
