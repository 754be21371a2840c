//! # Price Resolution
//!
//! Computes the single authoritative unit price for one pricing decision.
//!
//! ## Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Price Resolution Order                              │
//! │                                                                         │
//! │  requested_quantity: 12                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Wholesale tier?  tiers: [{2: 43.000}, {10: 40.000}, {50: 38.000}] │
//! │       │                                                                 │
//! │       ├── qualifying: 2 and 10 → HIGHEST threshold wins → Rp 40.000    │
//! │       │   (tier price beats the flat discount; bulk pricing already   │
//! │       │    reflects the best rate)                                     │
//! │       │                                                                 │
//! │  2. No tier qualifies → discount_price, if present and positive        │
//! │       │                                                                 │
//! │  3. Otherwise → base_price                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function, no side effects, safe to call concurrently.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::PriceFacts;

/// Resolves the displayable/quotable unit price from the given facts.
///
/// ## Rules
/// 1. The wholesale tier with the **largest** `minimum_quantity` that is
///    `<= requested_quantity` wins outright when one exists.
/// 2. Otherwise the flat `discount_price` applies, when present and positive.
/// 3. Otherwise the `base_price` applies.
///
/// The resolved price must be positive. A zero or negative outcome means
/// the catalog data is corrupt; the resolver reports it instead of
/// inventing a price.
///
/// ## Example
/// ```rust
/// use gerai_core::money::Money;
/// use gerai_core::pricing::resolve_price;
/// use gerai_core::types::{PriceFacts, WholesaleTier};
///
/// let facts = PriceFacts {
///     base_price: Money::from_rupiah(100_000),
///     discount_price: Some(Money::from_rupiah(90_000)),
///     tiers: vec![WholesaleTier {
///         minimum_quantity: 10,
///         unit_price: Money::from_rupiah(80_000),
///     }],
///     requested_quantity: 10,
/// };
///
/// // The tier qualifies, so it beats the discount
/// assert_eq!(resolve_price(&facts).unwrap().rupiah(), 80_000);
/// ```
pub fn resolve_price(facts: &PriceFacts) -> CoreResult<Money> {
    let qualifying_tier = facts
        .tiers
        .iter()
        .filter(|tier| tier.minimum_quantity <= facts.requested_quantity)
        .max_by_key(|tier| tier.minimum_quantity);

    let candidate = match qualifying_tier {
        Some(tier) => tier.unit_price,
        None => match facts.discount_price {
            Some(discount) if discount.is_positive() => discount,
            _ => facts.base_price,
        },
    };

    if !candidate.is_positive() {
        return Err(CoreError::NonPositivePrice {
            rupiah: candidate.rupiah(),
        });
    }

    Ok(candidate)
}

// =============================================================================
// Unit Tests
// =============================================================================
