//! # Domain Types
//!
//! Core domain types for the Gerai Tani lead-routing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  WholesaleTier  │   │   SalesAdmin    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  min_quantity   │   │  id (UUID)      │       │
//! │  │  name           │   │  unit_price     │   │  whatsapp_number│       │
//! │  │  base_price     │   │                 │   │  usage_count    │       │
//! │  │  discount_price │   │  (per product,  │   │  last_selected  │       │
//! │  └────────┬────────┘   │   unique qty)   │   │  priority_order │       │
//! │           │            └────────┬────────┘   └────────┬────────┘       │
//! │           └──────────┬──────────┘                     │                │
//! │                      ▼                                ▼                │
//! │              ┌───────────────┐               ┌─────────────────┐       │
//! │              │  PriceFacts   │               │ SalesResolution │       │
//! │              │ (one pricing  │               │ (one routed     │       │
//! │              │   decision)   │               │   lead)         │       │
//! │              └───────────────┘               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Row-shaped types (`Product`, `SalesAdmin`, `Inquiry`) derive
//! `sqlx::FromRow` behind the `sqlx` feature so gerai-db can load them
//! directly; the derives add no runtime behavior here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::SalesChannel;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, reduced to what pricing and lead routing need.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in lead messages and quotes.
    pub name: String,

    /// Base unit price in whole rupiah.
    pub base_price_rupiah: i64,

    /// Optional flat promotional price in whole rupiah.
    /// Only meaningful when below the base price; the admin UI is expected
    /// to enforce that, the resolver does not re-validate it.
    pub discount_price_rupiah: Option<i64>,

    /// Whether the product is visible/sellable (soft delete).
    pub is_active: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_rupiah(self.base_price_rupiah)
    }

    /// Returns the promotional price as a Money type, if any.
    #[inline]
    pub fn discount_price(&self) -> Option<Money> {
        self.discount_price_rupiah.map(Money::from_rupiah)
    }

    /// Combines the product with its wholesale tiers into the pricing
    /// projection the resolver works on.
    pub fn pricing(&self, tiers: Vec<WholesaleTier>) -> ProductPricing {
        ProductPricing {
            id: self.id.clone(),
            name: self.name.clone(),
            base_price: self.base_price(),
            discount_price: self.discount_price(),
            tiers,
        }
    }
}

// =============================================================================
// Wholesale Tier
// =============================================================================

/// One quantity break for a product.
///
/// For a given product no two tiers share a `minimum_quantity`, and tiers
/// are kept ascending by threshold (the storage layer orders them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholesaleTier {
    /// Smallest quantity at which this tier applies. Always >= 2.
    pub minimum_quantity: i64,

    /// Per-unit price at this tier.
    pub unit_price: Money,
}

// =============================================================================
// Price Facts
// =============================================================================

/// The inputs for one pricing decision.
///
/// Assembled from a [`ProductPricing`] plus the requested quantity; the
/// price resolver consumes this and nothing else.
#[derive(Debug, Clone)]
pub struct PriceFacts {
    /// Base unit price. Mandatory, must be positive.
    pub base_price: Money,

    /// Flat promotional override, when present.
    pub discount_price: Option<Money>,

    /// Quantity breaks, ascending by `minimum_quantity`.
    pub tiers: Vec<WholesaleTier>,

    /// Quantity being priced. Lead generation uses 1 (quantity unknown).
    pub requested_quantity: i64,
}

// =============================================================================
// Product Pricing Projection
// =============================================================================

/// A product's pricing data as loaded from storage: the product identity
/// plus everything needed to price any quantity of it.
#[derive(Debug, Clone)]
pub struct ProductPricing {
    pub id: String,
    pub name: String,
    pub base_price: Money,
    pub discount_price: Option<Money>,
    pub tiers: Vec<WholesaleTier>,
}

impl ProductPricing {
    /// Builds the facts for pricing `quantity` units.
    pub fn facts(&self, quantity: i64) -> PriceFacts {
        PriceFacts {
            base_price: self.base_price,
            discount_price: self.discount_price,
            tiers: self.tiers.clone(),
            requested_quantity: quantity,
        }
    }
}

// =============================================================================
// Sales Admin
// =============================================================================

/// A human sales agent who can receive leads.
///
/// `usage_count` and `last_selected_at` are mutated only by the rotation
/// side effect after a lead is routed; everything else is managed by the
/// (external) admin UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesAdmin {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, shown to the customer in the response.
    pub name: String,

    /// Digits-only WhatsApp number. Absent only for admins who never
    /// service WA leads (in practice always present).
    pub whatsapp_number: Option<String>,

    /// Shopee storefront URL, if the admin has one.
    pub shopee_link: Option<String>,

    /// Tokopedia storefront URL, if the admin has one.
    pub tokopedia_link: Option<String>,

    /// Inactive admins are never selected.
    pub is_active: bool,

    /// How many leads this admin has received. Monotonically incremented.
    pub usage_count: i64,

    /// When this admin last received a lead. `None` means never, and
    /// sorts before any real timestamp in the rotation order.
    pub last_selected_at: Option<DateTime<Utc>>,

    /// Final tie-break: lower values are preferred.
    pub priority_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SalesAdmin {
    /// Whether this admin has a usable contact method for `channel`.
    ///
    /// A present-but-empty column counts as absent; an empty link must
    /// never reach a customer.
    pub fn supports(&self, channel: SalesChannel) -> bool {
        let field = match channel {
            SalesChannel::Whatsapp => &self.whatsapp_number,
            SalesChannel::Shopee => &self.shopee_link,
            SalesChannel::Tokopedia => &self.tokopedia_link,
        };
        field.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

// =============================================================================
// Sales Resolution
// =============================================================================

/// The ephemeral output of one resolve operation. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesResolution {
    /// The channel the lead was routed to.
    pub channel: SalesChannel,

    /// Fully-formed URL for the chosen channel.
    pub target_link: String,

    /// Pre-filled lead message. Empty for storefront channels.
    pub message_text: String,

    /// Display name of the selected admin.
    pub admin_name: String,
}

// =============================================================================
// Inquiry
// =============================================================================

/// One append-only customer inquiry, stamped with the client IP so the
/// table itself serves as the sliding rate-limit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Inquiry {
    pub id: String,
    pub product_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
