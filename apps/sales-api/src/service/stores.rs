//! # SQLite-backed Collaborators
//!
//! Wires the collaborator traits to the gerai-db repositories. `Database`
//! is cheap to clone, so the same handle backs all three interfaces.

use async_trait::async_trait;
use chrono::Utc;

use super::{AdminDirectory, ProductStore, SiteSettings, StoreError};
use gerai_core::{ProductPricing, SalesAdmin};
use gerai_db::Database;

#[async_trait]
impl SiteSettings for Database {
    async fn is_sales_enabled(&self) -> Result<bool, StoreError> {
        Ok(self.settings().is_sales_enabled().await?)
    }
}

#[async_trait]
impl ProductStore for Database {
    async fn pricing(&self, product_id: &str) -> Result<Option<ProductPricing>, StoreError> {
        Ok(self.products().pricing(product_id).await?)
    }
}

#[async_trait]
impl AdminDirectory for Database {
    async fn list_active_admins(&self) -> Result<Vec<SalesAdmin>, StoreError> {
        Ok(self.admins().list_active().await?)
    }

    async fn increment_usage(&self, admin_id: &str) -> Result<(), StoreError> {
        // Single atomic UPDATE; the selection time is stamped here, at
        // the moment the write lands
        Ok(self.admins().record_selection(admin_id, Utc::now()).await?)
    }
}
