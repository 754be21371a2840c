//! # Sales Channel Resolver
//!
//! Orchestrates one resolve: kill-switch, product lookup, deterministic
//! admin selection, payload construction, and the fire-and-forget
//! rotation write-back.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              resolve(product_id, channel)                               │
//! │                                                                         │
//! │  1. kill-switch off?            → Disabled          (nothing else runs)│
//! │  2. product missing?            → ProductNotFound                      │
//! │  3. unknown channel value?      → InvalidChannel                       │
//! │  4. load active roster                                                  │
//! │  5. select_admin (pure)         → NoAdminAvailable on empty roster     │
//! │  6. build payload (pure)        → ChannelUnavailable if no contact     │
//! │  7. tokio::spawn increment ──── detached; errors logged, never awaited │
//! │  8. return SalesResolution                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checks run in exactly that order: a disabled feature answers 503
//! even for requests that are also malformed, and performs no reads at
//! all.
//!
//! There is no lock around the read-then-increment sequence: concurrent
//! resolves may pick the same least-used admin before either increment
//! lands. That skews fairness by at most the number of in-flight requests
//! and never corrupts state, which is the accepted trade-off.

use std::sync::Arc;

use tracing::{info, warn};

use super::{AdminDirectory, ProductStore, ResolveError, SiteSettings};
use gerai_core::channel::{storefront_resolution, whatsapp_resolution};
use gerai_core::pricing::resolve_price;
use gerai_core::rotation::select_admin;
use gerai_core::{SalesChannel, SalesResolution};

/// Leads are priced at quantity 1; the customer's quantity isn't known yet.
const LEAD_QUANTITY: i64 = 1;

/// The resolve orchestrator. Holds its collaborators behind trait objects
/// so tests can swap in fakes.
pub struct SalesResolver {
    settings: Arc<dyn SiteSettings>,
    products: Arc<dyn ProductStore>,
    admins: Arc<dyn AdminDirectory>,
}

impl SalesResolver {
    /// Creates a resolver over the given collaborators.
    pub fn new(
        settings: Arc<dyn SiteSettings>,
        products: Arc<dyn ProductStore>,
        admins: Arc<dyn AdminDirectory>,
    ) -> Self {
        SalesResolver {
            settings,
            products,
            admins,
        }
    }

    /// Routes one lead: picks an admin for `channel` and builds the
    /// contact payload.
    ///
    /// `channel` arrives as the raw query value and is validated here, in
    /// precondition order: the kill-switch is read first and a disabled
    /// feature performs zero roster or product reads.
    pub async fn resolve(
        &self,
        product_id: &str,
        channel: &str,
    ) -> Result<SalesResolution, ResolveError> {
        if !self.settings.is_sales_enabled().await? {
            return Err(ResolveError::Disabled);
        }

        let pricing = self
            .products
            .pricing(product_id)
            .await?
            .ok_or_else(|| ResolveError::ProductNotFound(product_id.to_string()))?;

        let channel: SalesChannel = channel.parse()?;

        let roster = self.admins.list_active_admins().await?;
        let admin = select_admin(&roster, channel).ok_or(ResolveError::NoAdminAvailable)?;

        let resolution = match channel {
            SalesChannel::Whatsapp => {
                let unit_price = resolve_price(&pricing.facts(LEAD_QUANTITY))?;
                whatsapp_resolution(admin, &pricing.name, unit_price)
            }
            SalesChannel::Shopee | SalesChannel::Tokopedia => {
                storefront_resolution(admin, channel)
            }
        }
        .ok_or(ResolveError::ChannelUnavailable(channel))?;

        // Fire-and-forget rotation write-back. The lead is already
        // routed; a failed increment only biases future fairness, so it
        // is logged and swallowed, never awaited, never retried here.
        let directory = Arc::clone(&self.admins);
        let admin_id = admin.id.clone();
        tokio::spawn(async move {
            if let Err(err) = directory.increment_usage(&admin_id).await {
                warn!(
                    admin_id = %admin_id,
                    error = %err,
                    "Rotation counter update failed after lead was routed"
                );
            }
        });

        info!(
            product_id = %pricing.id,
            channel = channel.as_str(),
            admin = %resolution.admin_name,
            "Lead routed"
        );

        Ok(resolution)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
