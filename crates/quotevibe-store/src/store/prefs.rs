//! Key/value preference access.

use super::Store;
use quotevibe_core::error::QuoteVibeError;

/// Auth bearer token.
pub const KEY_TOKEN: &str = "token";

/// Chosen display language.
pub const KEY_APP_LANGUAGE: &str = "app_language";

/// Chosen country.
pub const KEY_APP_COUNTRY: &str = "app_country";

impl Store {
    /// Store a preference (upsert by key).
    pub async fn set(&self, key: &str, value: &str) -> Result<(), QuoteVibeError> {
        sqlx::query(
            "INSERT INTO preferences (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| QuoteVibeError::Store(format!("upsert preference failed: {e}")))?;

        Ok(())
    }

    /// Get a single preference by key.
    pub async fn get(&self, key: &str) -> Result<Option<String>, QuoteVibeError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| QuoteVibeError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    /// Delete a preference. Returns `true` if a row was deleted.
    pub async fn delete(&self, key: &str) -> Result<bool, QuoteVibeError> {
        let result = sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| QuoteVibeError::Store(format!("delete failed: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Stored auth token, if any.
    pub async fn token(&self) -> Result<Option<String>, QuoteVibeError> {
        self.get(KEY_TOKEN).await
    }

    pub async fn set_token(&self, token: &str) -> Result<(), QuoteVibeError> {
        self.set(KEY_TOKEN, token).await
    }

    pub async fn clear_token(&self) -> Result<(), QuoteVibeError> {
        self.delete(KEY_TOKEN).await.map(|_| ())
    }

    /// Persisted language choice, if any.
    pub async fn app_language(&self) -> Result<Option<String>, QuoteVibeError> {
        self.get(KEY_APP_LANGUAGE).await
    }

    pub async fn set_app_language(&self, language: &str) -> Result<(), QuoteVibeError> {
        self.set(KEY_APP_LANGUAGE, language).await
    }

    /// Persisted country choice, if any.
    pub async fn app_country(&self) -> Result<Option<String>, QuoteVibeError> {
        self.get(KEY_APP_COUNTRY).await
    }

    pub async fn set_app_country(&self, country: &str) -> Result<(), QuoteVibeError> {
        self.set(KEY_APP_COUNTRY, country).await
    }
}
