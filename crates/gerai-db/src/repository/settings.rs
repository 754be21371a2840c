//! # Site Settings Repository
//!
//! Key-value configuration store. The only key the resolve path cares
//! about is the kill-switch.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Settings key for the sales kill-switch.
pub const SALES_ENABLED_KEY: &str = "sales_enabled";

/// Repository for site settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads the sales kill-switch.
    ///
    /// Fail-closed: a missing row or any value other than `"true"` means
    /// sales are disabled.
    pub async fn is_sales_enabled(&self) -> DbResult<bool> {
        let value = self.get(SALES_ENABLED_KEY).await?;
        Ok(value.as_deref() == Some("true"))
    }

    /// Reads a raw setting value.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM site_settings WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Writes a setting, inserting or overwriting.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, value = %value, "Writing site setting");

        sqlx::query(
            "INSERT INTO site_settings (key, value) VALUES (?1, ?2) \
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
