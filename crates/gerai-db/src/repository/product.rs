//! # Product Repository
//!
//! Loads the pricing facts one resolve or quote needs: the product row
//! plus its wholesale tiers, ascending by threshold.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use gerai_core::{Money, Product, ProductPricing, WholesaleTier};

/// Repository for product pricing data.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Loads the pricing projection for an active product.
    ///
    /// ## Returns
    /// * `Ok(Some(ProductPricing))` - product found, tiers attached
    /// * `Ok(None)` - product missing or deactivated (both read as
    ///   not-found by callers; a hidden product must not leak prices)
    pub async fn pricing(&self, id: &str) -> DbResult<Option<ProductPricing>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, base_price_rupiah, discount_price_rupiah, \
                    is_active, created_at, updated_at \
             FROM products \
             WHERE id = ?1 AND is_active = 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(product) = product else {
            return Ok(None);
        };

        let tier_rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT min_quantity, unit_price_rupiah \
             FROM wholesale_tiers \
             WHERE product_id = ?1 \
             ORDER BY min_quantity ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let tiers = tier_rows
            .into_iter()
            .map(|(min_quantity, unit_price)| WholesaleTier {
                minimum_quantity: min_quantity,
                unit_price: Money::from_rupiah(unit_price),
            })
            .collect::<Vec<_>>();

        debug!(product_id = %id, tiers = tiers.len(), "Loaded product pricing");
        Ok(Some(product.pricing(tiers)))
    }

    /// Inserts a product together with its wholesale tiers.
    /// Used by the seed binary and tests.
    pub async fn insert(&self, product: &Product, tiers: &[WholesaleTier]) -> DbResult<()> {
        debug!(product_id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            "INSERT INTO products ( \
                id, name, base_price_rupiah, discount_price_rupiah, \
                is_active, created_at, updated_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.base_price_rupiah)
        .bind(product.discount_price_rupiah)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        for tier in tiers {
            sqlx::query(
                "INSERT INTO wholesale_tiers (id, product_id, min_quantity, unit_price_rupiah) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(&product.id)
            .bind(tier.minimum_quantity)
            .bind(tier.unit_price.rupiah())
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use uuid::Uuid;

    fn product(name: &str, base: i64, discount: Option<i64>, active: bool) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            base_price_rupiah: base,
            discount_price_rupiah: discount,
            is_active: active,
            created_at: now,
            updated_at: now,
        }
    }

    fn tier(min_quantity: i64, unit_price: i64) -> WholesaleTier {
        WholesaleTier {
            minimum_quantity: min_quantity,
            unit_price: Money::from_rupiah(unit_price),
        }
    }

    #[tokio::test]
    async fn test_pricing_returns_tiers_ascending() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let p = product("Benih Jagung 1kg", 45_000, None, true);
        // Inserted out of order on purpose; the query orders them
        repo.insert(&p, &[tier(10, 40_000), tier(2, 43_000)])
            .await
            .unwrap();

        let pricing = repo.pricing(&p.id).await.unwrap().unwrap();
        assert_eq!(pricing.name, "Benih Jagung 1kg");
        assert_eq!(pricing.base_price.rupiah(), 45_000);
        assert_eq!(
            pricing
                .tiers
                .iter()
                .map(|t| t.minimum_quantity)
                .collect::<Vec<_>>(),
            vec![2, 10]
        );
    }

    #[tokio::test]
    async fn test_pricing_hides_inactive_products() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let p = product("Arsip", 10_000, None, false);
        repo.insert(&p, &[]).await.unwrap();

        assert!(repo.pricing(&p.id).await.unwrap().is_none());
        assert!(repo.pricing("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_tier_threshold_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let p = product("Pupuk NPK 1kg", 45_000, None, true);
        let err = repo
            .insert(&p, &[tier(5, 40_000), tier(5, 39_000)])
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::DbError::UniqueViolation { .. }));
    }
}
