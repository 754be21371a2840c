//! # Deterministic Admin Rotation
//!
//! Selects which sales admin receives the next lead. No randomness, no
//! weights - only stored counters and timestamps, so any selection can be
//! replayed from the roster snapshot that produced it.
//!
//! ## Selection Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rotation Total Order                                 │
//! │                                                                         │
//! │  1. usage_count       ascending   (least-used admin first)             │
//! │  2. last_selected_at  ascending   (None = never selected = earliest)   │
//! │  3. priority_order    ascending   (explicit final tie-break)           │
//! │                                                                         │
//! │  Example roster:                                                        │
//! │    Ani   usage=1  last=10:02  prio=2                                   │
//! │    Budi  usage=1  last=None   prio=5   ← selected (never used wins)    │
//! │    Cici  usage=3  last=09:55  prio=1                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Option<DateTime<Utc>>` already orders `None` before any `Some`, which
//! is exactly the never-selected-first rule - no sentinel timestamps.

use crate::channel::SalesChannel;
use crate::types::SalesAdmin;

/// Narrows a roster to the admins eligible for `channel`.
///
/// Inactive admins are dropped outright. The channel-capability filter is
/// advisory: if nobody on the active roster can service the channel, the
/// full active roster is returned so the lead still lands with a human
/// (answering a lead outranks channel purity). Only an empty active
/// roster yields an empty result.
pub fn eligible<'a>(roster: &'a [SalesAdmin], channel: SalesChannel) -> Vec<&'a SalesAdmin> {
    let active: Vec<&SalesAdmin> = roster.iter().filter(|a| a.is_active).collect();
    if active.is_empty() {
        return active;
    }

    let capable: Vec<&SalesAdmin> = active
        .iter()
        .copied()
        .filter(|a| a.supports(channel))
        .collect();

    if capable.is_empty() {
        active
    } else {
        capable
    }
}

/// Picks exactly one admin for the next lead, or `None` when the active
/// roster is empty.
///
/// The winner is the minimum under the total order
/// `(usage_count, last_selected_at, priority_order)`, all ascending.
pub fn select_admin<'a>(roster: &'a [SalesAdmin], channel: SalesChannel) -> Option<&'a SalesAdmin> {
    eligible(roster, channel)
        .into_iter()
        .min_by_key(|a| (a.usage_count, a.last_selected_at, a.priority_order))
}

// =============================================================================
// Unit Tests
// =============================================================================
