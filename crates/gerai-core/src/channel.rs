//! # Sales Channels
//!
//! Channel identification and contact payload construction.
//!
//! ## Channel Payloads
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Each Channel Produces                           │
//! │                                                                         │
//! │  WA         https://wa.me/<digits>?text=<encoded message>              │
//! │             message: fixed Indonesian template with product name        │
//! │             and the quantity-1 price ("Rp 45.000")                      │
//! │                                                                         │
//! │  Shopee     the admin's Shopee storefront URL, verbatim                 │
//! │  Tokopedia  the admin's Tokopedia storefront URL, verbatim              │
//! │             no message text for storefront channels                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure string construction; the orchestration layer
//! decides which builder to call and what a `None` means (channel
//! unavailable, HTTP 503).

use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{SalesAdmin, SalesResolution};

// =============================================================================
// Sales Channel
// =============================================================================

/// The three supported lead channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesChannel {
    /// WhatsApp deep link with a pre-filled message.
    #[serde(rename = "wa")]
    Whatsapp,
    /// Shopee storefront redirect.
    #[serde(rename = "shopee")]
    Shopee,
    /// Tokopedia storefront redirect.
    #[serde(rename = "tokopedia")]
    Tokopedia,
}

impl SalesChannel {
    /// The wire name of this channel, as it appears in requests and
    /// responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SalesChannel::Whatsapp => "wa",
            SalesChannel::Shopee => "shopee",
            SalesChannel::Tokopedia => "tokopedia",
        }
    }
}

/// Parses the `channel` query parameter, case-insensitively.
impl FromStr for SalesChannel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wa" => Ok(SalesChannel::Whatsapp),
            "shopee" => Ok(SalesChannel::Shopee),
            "tokopedia" => Ok(SalesChannel::Tokopedia),
            _ => Err(ValidationError::NotAllowed {
                field: "channel".to_string(),
                allowed: vec![
                    "wa".to_string(),
                    "shopee".to_string(),
                    "tokopedia".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// WhatsApp Payload
// =============================================================================

/// Strips the formatting characters phone numbers are typically stored
/// with (spaces, `+`, `-`), leaving the form wa.me expects.
///
/// ## Example
/// ```rust
/// use gerai_core::channel::normalize_whatsapp_number;
///
/// assert_eq!(normalize_whatsapp_number("+62 812-3456-7890"), "6281234567890");
/// ```
pub fn normalize_whatsapp_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '+' | '-'))
        .collect()
}

/// Builds the fixed lead-generation message for a product.
///
/// The price is the quantity-1 price; at lead time the customer's
/// quantity is not yet known.
pub fn build_lead_message(product_name: &str, unit_price: Money) -> String {
    format!(
        "Halo, saya tertarik dengan produk *{}* ({}). Apakah masih tersedia?",
        product_name, unit_price
    )
}

/// Builds a wa.me deep link carrying the pre-filled message.
pub fn build_whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_whatsapp_number(number),
        utf8_percent_encode(message, NON_ALPHANUMERIC)
    )
}

// =============================================================================
// Resolution Builders
// =============================================================================

/// Builds the WA payload for an admin, or `None` if the admin has no
/// usable WhatsApp number.
pub fn whatsapp_resolution(
    admin: &SalesAdmin,
    product_name: &str,
    unit_price: Money,
) -> Option<SalesResolution> {
    let number = admin
        .whatsapp_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())?;

    let message = build_lead_message(product_name, unit_price);
    let link = build_whatsapp_link(number, &message);

    Some(SalesResolution {
        channel: SalesChannel::Whatsapp,
        target_link: link,
        message_text: message,
        admin_name: admin.name.clone(),
    })
}

/// Builds the storefront payload for Shopee/Tokopedia, or `None` if the
/// admin has no link for that channel. A broken/empty link must never be
/// handed to a customer; the caller turns `None` into channel-unavailable.
pub fn storefront_resolution(admin: &SalesAdmin, channel: SalesChannel) -> Option<SalesResolution> {
    let link = match channel {
        SalesChannel::Shopee => admin.shopee_link.as_deref(),
        SalesChannel::Tokopedia => admin.tokopedia_link.as_deref(),
        // WA leads carry a message and go through whatsapp_resolution
        SalesChannel::Whatsapp => None,
    }?;

    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    Some(SalesResolution {
        channel,
        target_link: link.to_string(),
        message_text: String::new(),
        admin_name: admin.name.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn admin() -> SalesAdmin {
        let now = Utc::now();
        SalesAdmin {
            id: "a1".to_string(),
            name: "Budi".to_string(),
            whatsapp_number: Some("+62 812-3456-7890".to_string()),
            shopee_link: Some("https://shopee.co.id/geraitani".to_string()),
            tokopedia_link: None,
            is_active: true,
            usage_count: 0,
            last_selected_at: None,
            priority_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!("wa".parse::<SalesChannel>().unwrap(), SalesChannel::Whatsapp);
        assert_eq!("WA".parse::<SalesChannel>().unwrap(), SalesChannel::Whatsapp);
        assert_eq!(
            "Shopee".parse::<SalesChannel>().unwrap(),
            SalesChannel::Shopee
        );
        assert_eq!(
            " tokopedia ".parse::<SalesChannel>().unwrap(),
            SalesChannel::Tokopedia
        );
        assert!("instagram".parse::<SalesChannel>().is_err());
        assert!("".parse::<SalesChannel>().is_err());
    }

    #[test]
    fn test_normalize_whatsapp_number() {
        assert_eq!(normalize_whatsapp_number("+62 812-3456-7890"), "6281234567890");
        assert_eq!(normalize_whatsapp_number("6281234567890"), "6281234567890");
    }

    #[test]
    fn test_lead_message_contains_name_and_formatted_price() {
        let message = build_lead_message("Pupuk NPK 1kg", Money::from_rupiah(45_000));
        assert!(message.contains("*Pupuk NPK 1kg*"));
        assert!(message.contains("Rp 45.000"));
    }

    #[test]
    fn test_whatsapp_link_is_percent_encoded() {
        let link = build_whatsapp_link("+62 812-3456-7890", "Halo, apakah tersedia?");
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
        // No raw spaces or query-breaking characters survive encoding
        assert!(!link.contains(' '));
        assert!(!link.contains(','));
        assert!(link.contains("Halo%2C%20apakah%20tersedia%3F"));
    }

    #[test]
    fn test_whatsapp_resolution() {
        let resolution =
            whatsapp_resolution(&admin(), "Pupuk NPK 1kg", Money::from_rupiah(45_000)).unwrap();
        assert_eq!(resolution.channel, SalesChannel::Whatsapp);
        assert_eq!(resolution.admin_name, "Budi");
        assert!(resolution.target_link.starts_with("https://wa.me/6281234567890?text="));
        assert!(resolution.message_text.contains("Rp 45.000"));
    }

    #[test]
    fn test_whatsapp_resolution_requires_number() {
        let mut a = admin();
        a.whatsapp_number = None;
        assert!(whatsapp_resolution(&a, "Pupuk", Money::from_rupiah(1_000)).is_none());

        a.whatsapp_number = Some("  ".to_string());
        assert!(whatsapp_resolution(&a, "Pupuk", Money::from_rupiah(1_000)).is_none());
    }

    #[test]
    fn test_storefront_resolution() {
        let resolution = storefront_resolution(&admin(), SalesChannel::Shopee).unwrap();
        assert_eq!(resolution.target_link, "https://shopee.co.id/geraitani");
        assert_eq!(resolution.message_text, "");

        // No Tokopedia link configured
        assert!(storefront_resolution(&admin(), SalesChannel::Tokopedia).is_none());
        // WA is not a storefront channel
        assert!(storefront_resolution(&admin(), SalesChannel::Whatsapp).is_none());
    }
}
