use anyhow::{Result, anyhow};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::utils::app_config::DbPool;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub fn get_conn(pool: &DbPool) -> Result<DbConnection> {
    let conn = pool
        .get()
        .map_err(|e| anyhow!("Failed to acquire database connection: {}", e))?;

    Ok(conn)
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    tracing::info!("Running database migrations");
    let mut conn = get_conn(pool)?;

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!("Database migration failed: {}", e);
        anyhow!("Database migration failed: {}", e)
    })?;

    if applied.is_empty() {
        tracing::info!("No pending migrations to apply");
    } else {
        for version in &applied {
            tracing::info!("Applied migration {}", version);
        }
    }

    Ok(())
}
