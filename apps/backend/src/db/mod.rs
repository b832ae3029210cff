//! SQLite database operations

use chrono::Utc;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::error::{ApiError, Result};
use crate::models::DbSavedEntry;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Open an isolated in-memory database on a single connection.
    /// SQLite drops a `:memory:` database with its connection, so the
    /// pool must never open a second one.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Saved Entry Repository ===

    /// List a user's saved entries, oldest first.
    pub async fn list_entries(&self, user_id: &str) -> Result<Vec<DbSavedEntry>> {
        let entries = sqlx::query_as::<_, DbSavedEntry>(
            r#"
            SELECT id, user_id, entry, created_at
            FROM saved_entries
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Raw entry strings in stored order, as the quiz engine consumes them.
    pub async fn list_entry_strings(&self, user_id: &str) -> Result<Vec<String>> {
        let entries = self.list_entries(user_id).await?;
        Ok(entries.into_iter().map(|e| e.entry).collect())
    }

    /// Insert one entry. Returns false when the user already saved it.
    pub async fn add_entry(&self, user_id: &str, entry: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO saved_entries (user_id, entry, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, entry) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(entry)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete one entry. Returns false when it was not present.
    pub async fn remove_entry(&self, user_id: &str, entry: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM saved_entries
            WHERE user_id = $1 AND entry = $2
            "#,
        )
        .bind(user_id)
        .bind(entry)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
