//! # Inquiry Repository
//!
//! Append-only inquiry log. There is no update or delete path; the table
//! doubles as the state for the sliding-window rate limiter, which just
//! counts how many rows an IP wrote inside the window.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use gerai_core::Inquiry;

/// Repository for customer inquiries.
#[derive(Debug, Clone)]
pub struct InquiryRepository {
    pool: SqlitePool,
}

impl InquiryRepository {
    /// Creates a new InquiryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InquiryRepository { pool }
    }

    /// Appends an inquiry.
    pub async fn insert(&self, inquiry: &Inquiry) -> DbResult<()> {
        debug!(inquiry_id = %inquiry.id, ip = %inquiry.ip_address, "Appending inquiry");

        sqlx::query(
            "INSERT INTO inquiries ( \
                id, product_id, name, phone, message, ip_address, created_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&inquiry.id)
        .bind(&inquiry.product_id)
        .bind(&inquiry.name)
        .bind(&inquiry.phone)
        .bind(&inquiry.message)
        .bind(&inquiry.ip_address)
        .bind(inquiry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts inquiries from `ip` newer than `since`.
    ///
    /// This is the whole sliding window: the cutoff moves with every
    /// request, old rows simply age out of the count.
    pub async fn count_since(&self, ip: &str, since: DateTime<Utc>) -> DbResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM inquiries \
             WHERE ip_address = ?1 AND created_at > ?2",
        )
        .bind(ip)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
