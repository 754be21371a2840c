//! # Sales Admin Repository
//!
//! Roster reads and the rotation counter write-back.
//!
//! ## The Rotation Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Why a Single UPDATE Statement                              │
//! │                                                                         │
//! │  ❌ WRONG: read-modify-write in application memory                     │
//! │     let a = get(id); a.usage_count += 1; save(a);                      │
//! │     Two concurrent resolves can overwrite each other's count.          │
//! │                                                                         │
//! │  ✅ CORRECT: delta update inside the database                          │
//! │     UPDATE sales_admins SET usage_count = usage_count + 1 ...          │
//! │     Concurrent increments serialize in SQLite; none are lost.          │
//! │                                                                         │
//! │  Concurrent resolves may still both READ the same least-used admin    │
//! │  before either increment lands. That skews fairness by at most the     │
//! │  number of in-flight requests and is accepted for request latency.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use gerai_core::SalesAdmin;

const SELECT_COLUMNS: &str = "id, name, whatsapp_number, shopee_link, tokopedia_link, \
     is_active, usage_count, last_selected_at, priority_order, created_at, updated_at";

/// Repository for sales-admin roster operations.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    /// Creates a new AdminRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AdminRepository { pool }
    }

    /// Lists all active admins.
    ///
    /// Ordered by `priority_order` for stable output; the actual rotation
    /// ordering is applied in gerai-core on the returned snapshot.
    pub async fn list_active(&self) -> DbResult<Vec<SalesAdmin>> {
        let admins = sqlx::query_as::<_, SalesAdmin>(&format!(
            "SELECT {SELECT_COLUMNS} FROM sales_admins \
             WHERE is_active = 1 \
             ORDER BY priority_order ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = admins.len(), "Loaded active admin roster");
        Ok(admins)
    }

    /// Gets an admin by ID, active or not.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<SalesAdmin>> {
        let admin = sqlx::query_as::<_, SalesAdmin>(&format!(
            "SELECT {SELECT_COLUMNS} FROM sales_admins WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Records that an admin received a lead: bumps `usage_count` and
    /// stamps `last_selected_at`, as one atomic UPDATE.
    pub async fn record_selection(&self, id: &str, at: DateTime<Utc>) -> DbResult<()> {
        debug!(admin_id = %id, "Recording admin selection");

        let result = sqlx::query(
            "UPDATE sales_admins \
             SET usage_count = usage_count + 1, \
                 last_selected_at = ?2, \
                 updated_at = ?2 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("SalesAdmin", id));
        }

        Ok(())
    }

    /// Inserts a new admin. Used by the seed binary and tests; day-to-day
    /// roster management lives in the (external) admin UI.
    pub async fn insert(&self, admin: &SalesAdmin) -> DbResult<()> {
        debug!(admin_id = %admin.id, name = %admin.name, "Inserting sales admin");

        sqlx::query(
            "INSERT INTO sales_admins ( \
                id, name, whatsapp_number, shopee_link, tokopedia_link, \
                is_active, usage_count, last_selected_at, priority_order, \
                created_at, updated_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )
        .bind(&admin.id)
        .bind(&admin.name)
        .bind(&admin.whatsapp_number)
        .bind(&admin.shopee_link)
        .bind(&admin.tokopedia_link)
        .bind(admin.is_active)
        .bind(admin.usage_count)
        .bind(admin.last_selected_at)
        .bind(admin.priority_order)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
