//! # Service Layer
//!
//! The resolve orchestration and the collaborator interfaces it runs
//! against.
//!
//! ## Collaborator Interfaces
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SalesResolver Collaborators                        │
//! │                                                                         │
//! │  SiteSettings      is_sales_enabled()        kill-switch read           │
//! │  ProductStore      pricing(product_id)       price facts + tiers        │
//! │  AdminDirectory    list_active_admins()      roster snapshot            │
//! │                    increment_usage(id)       fire-and-forget counter    │
//! │                                                                         │
//! │  Production wires all three to the SQLite repositories (stores.rs);    │
//! │  tests swap in counting in-memory fakes.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod resolver;
mod stores;

pub use resolver::SalesResolver;

use async_trait::async_trait;
use thiserror::Error;

use gerai_core::{CoreError, ProductPricing, SalesAdmin, SalesChannel, ValidationError};
use gerai_db::DbError;

// =============================================================================
// Store Error
// =============================================================================

/// Opaque failure from a backing store.
///
/// Individual stores keep their own typed errors; by the time a failure
/// crosses a collaborator boundary it is only ever "the dependency is
/// unavailable", which callers surface as a generic internal error.
#[derive(Debug, Error)]
#[error("store unavailable: {0}")]
pub struct StoreError(pub String);

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        StoreError(err.to_string())
    }
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Read access to site configuration.
#[async_trait]
pub trait SiteSettings: Send + Sync {
    /// Whether the sales feature is enabled at all.
    async fn is_sales_enabled(&self) -> Result<bool, StoreError>;
}

/// Read access to product pricing facts.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Loads the pricing projection for a product, or `None` when it
    /// doesn't exist (or is hidden).
    async fn pricing(&self, product_id: &str) -> Result<Option<ProductPricing>, StoreError>;
}

/// Read/update access to the sales-admin roster.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Snapshot of all active admins.
    async fn list_active_admins(&self) -> Result<Vec<SalesAdmin>, StoreError>;

    /// Bumps the admin's usage counter and stamps the selection time.
    /// Called fire-and-forget; implementations must make the update
    /// atomic, callers never await or retry it in-request.
    async fn increment_usage(&self, admin_id: &str) -> Result<(), StoreError>;
}

// =============================================================================
// Resolve Error
// =============================================================================

/// Failure taxonomy of one resolve operation. All variants are terminal;
/// the caller can only change its input (or wait).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Kill-switch is off.
    #[error("Sales are currently disabled")]
    Disabled,

    /// Product missing or deactivated.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The requested channel is not one of the supported values.
    #[error("{0}")]
    InvalidChannel(#[from] ValidationError),

    /// Active roster is empty.
    #[error("No active sales admin is available")]
    NoAdminAvailable,

    /// The selected admin lacks the requested channel's contact method,
    /// even after the advisory fallback.
    #[error("No {} contact is configured for the selected admin", .0.as_str())]
    ChannelUnavailable(SalesChannel),

    /// Pricing data defect (non-positive price).
    #[error(transparent)]
    Pricing(#[from] CoreError),

    /// A backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
