use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - MIGRATIONS_PATH: directory with SQL migrations to apply on boot
///   (optional; skipped when unset)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or a
/// migration cannot be applied.
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;

    if let Ok(migrations_path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &migrations_path)
            .await
            .context("failed to run database migrations")?;
    }

    Ok(pool)
}
