//! Records linked to a party
//!
//! Addresses and contacts point at their party through a link holding the
//! party type and the party name. When several linked records carry the
//! same flag, the most recently modified one is preferred and equal
//! timestamps fall back to the lowest record name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{PartyName, PartyType};

/// Reference from an address or contact to the party it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyLink {
    pub party_type: PartyType,
    pub party: PartyName,
}

impl PartyLink {
    pub fn new(party_type: PartyType, party: impl Into<PartyName>) -> Self {
        Self {
            party_type,
            party: party.into(),
        }
    }
}

/// A record that belongs to a party
pub trait LinkedRecord {
    /// Unique record name
    fn record_name(&self) -> &str;

    /// Party the record is linked to
    fn link(&self) -> &PartyLink;

    /// Last modification time
    fn modified(&self) -> DateTime<Utc>;
}

/// Picks the preferred record among candidates sharing a flag
///
/// Most recently modified wins; equal timestamps go to the lowest name.
pub fn preferred<'a, T: LinkedRecord>(candidates: impl IntoIterator<Item = &'a T>) -> Option<&'a T> {
    candidates.into_iter().min_by(|a, b| {
        b.modified()
            .cmp(&a.modified())
            .then_with(|| a.record_name().cmp(b.record_name()))
    })
}
