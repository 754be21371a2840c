//! # gerai-core: Pure Business Logic for Gerai Tani
//!
//! This crate is the **heart** of the Gerai Tani storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gerai Tani Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront / Marketplace                     │   │
//! │  │    Product page ──► "Beli via WA" ──► wa.me deep link          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sales-api (axum)                             │   │
//! │  │    resolve_sales_channel, price_quote, submit_inquiry          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gerai-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ rotation  │  │   │
//! │  │   │  Product  │  │   Money   │  │  resolve_ │  │  select_  │  │   │
//! │  │   │SalesAdmin │  │   (IDR)   │  │   price   │  │   admin   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     gerai-db (Storage Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SalesAdmin, PriceFacts, etc.)
//! - [`money`] - Money type for whole-rupiah arithmetic (no floating point!)
//! - [`pricing`] - Wholesale tier / discount / base price resolution
//! - [`rotation`] - Deterministic least-used admin selection
//! - [`channel`] - Sales channel parsing and contact payload construction
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: IDR is zero-decimal; all amounts are whole rupiah (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gerai_core::money::Money;
//! use gerai_core::pricing::resolve_price;
//! use gerai_core::types::{PriceFacts, WholesaleTier};
//!
//! let facts = PriceFacts {
//!     base_price: Money::from_rupiah(45_000),
//!     discount_price: None,
//!     tiers: vec![WholesaleTier {
//!         minimum_quantity: 5,
//!         unit_price: Money::from_rupiah(40_000),
//!     }],
//!     requested_quantity: 1,
//! };
//!
//! // Quantity 1 is below the first tier, so the base price wins
//! let price = resolve_price(&facts).unwrap();
//! assert_eq!(price.rupiah(), 45_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod channel;
pub mod error;
pub mod money;
pub mod pricing;
pub mod rotation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gerai_core::Money` instead of
// `use gerai_core::money::Money`

pub use channel::SalesChannel;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted by the price-quote operation
///
/// ## Business Reason
/// Prevents accidental absurd quotes (e.g. typing 1000000 instead of 100).
/// Bulk orders beyond this are negotiated by a sales admin directly.
pub const MAX_QUOTE_QUANTITY: i64 = 10_000;
