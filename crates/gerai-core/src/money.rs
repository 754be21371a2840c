//! # Money Module
//!
//! Provides the `Money` type for handling rupiah values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Whole Rupiah as i64                                      │
//! │    IDR is a zero-decimal currency - there is no "cent" to round.       │
//! │    Rp 45.000 is stored as the integer 45000, full stop.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gerai_core::money::Money;
//!
//! // Create from whole rupiah (the only way)
//! let price = Money::from_rupiah(45_000);
//!
//! // Display uses the Indonesian convention: dot thousands separator
//! assert_eq!(price.to_string(), "Rp 45.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Indonesian rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections in reports
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization, total ordering
///   so prices can be compared directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use gerai_core::money::Money;
    ///
    /// let price = Money::from_rupiah(45_000);
    /// assert_eq!(price.rupiah(), 45_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    ///
    /// Every price the resolver hands out must satisfy this; zero and
    /// negative amounts are data defects, not discounts.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way Indonesian storefronts do:
/// `Rp 45.000`, `Rp 1.250.000`. This exact text is interpolated into
/// WhatsApp lead messages, so the format is part of the contract.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Formats an absolute value with dot thousands separators (id-ID locale).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupiah() {
        let money = Money::from_rupiah(45_000);
        assert_eq!(money.rupiah(), 45_000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::from_rupiah(0).to_string(), "Rp 0");
        assert_eq!(Money::from_rupiah(500).to_string(), "Rp 500");
        assert_eq!(Money::from_rupiah(45_000).to_string(), "Rp 45.000");
        assert_eq!(Money::from_rupiah(1_250_000).to_string(), "Rp 1.250.000");
        assert_eq!(Money::from_rupiah(-9_500).to_string(), "-Rp 9.500");
    }

    #[test]
    fn test_ordering() {
        // Ord is derived, so tier prices can be compared directly
        assert!(Money::from_rupiah(40_000) < Money::from_rupiah(45_000));
    }

    #[test]
    fn test_positivity_checks() {
        assert!(Money::from_rupiah(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::from_rupiah(-100).is_positive());
    }
}
