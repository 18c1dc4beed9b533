//! SQLite-backed preference store.
//!
//! Split into focused submodules:
//! - `prefs` -- generic key/value access plus the three well-known keys

mod prefs;

#[cfg(test)]
mod tests;

pub use prefs::{KEY_APP_COUNTRY, KEY_APP_LANGUAGE, KEY_TOKEN};

use quotevibe_core::{config::StoreConfig, error::QuoteVibeError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Durable preference store backed by SQLite.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Create a new store, running migrations on first use.
    pub async fn new(config: &StoreConfig) -> Result<Self, QuoteVibeError> {
        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| QuoteVibeError::Store(format!("failed to create data dir: {e}")))?;
            }
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.db_path))
            .map_err(|e| QuoteVibeError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(opts)
            .await
            .map_err(|e| QuoteVibeError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Preference store initialized at {}", config.db_path);

        Ok(Self { pool })
    }

    /// Create an ephemeral in-memory store (tests, incognito sessions).
    ///
    /// Uses a single pooled connection: every connection to
    /// `sqlite::memory:` gets its own database, so a larger pool would
    /// scatter writes across invisible databases.
    pub async fn in_memory() -> Result<Self, QuoteVibeError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| QuoteVibeError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .map_err(|e| QuoteVibeError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run SQL migrations, tracking which have already been applied.
    pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), QuoteVibeError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| QuoteVibeError::Store(format!("failed to create migrations table: {e}")))?;

        Self::apply_migration(
            pool,
            "001_preferences",
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .await?;

        Ok(())
    }

    async fn apply_migration(
        pool: &SqlitePool,
        name: &str,
        sql: &str,
    ) -> Result<(), QuoteVibeError> {
        let applied: Option<(String,)> =
            sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                .bind(name)
                .fetch_optional(pool)
                .await
                .map_err(|e| QuoteVibeError::Store(format!("migration check failed: {e}")))?;

        if applied.is_some() {
            return Ok(());
        }

        sqlx::raw_sql(sql)
            .execute(pool)
            .await
            .map_err(|e| QuoteVibeError::Store(format!("migration '{name}' failed: {e}")))?;

        sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await
            .map_err(|e| QuoteVibeError::Store(format!("failed to record migration: {e}")))?;

        Ok(())
    }
}
