//! Domain types for the ticketing ledger.
//!
//! This module defines the fundamental types used throughout the system:
//! - [`AccountId`]: opaque account identifier (organizers, buyers, the admin)
//! - [`EventId`]: organizer-chosen event identifier (globally unique)
//! - [`TicketId`]: global ticket sequence number, allocated from 1 upward
//! - [`EventRecord`]: the authoritative event descriptor
//! - [`TicketRecord`]: an issued ticket, immutable once minted

use serde::{Deserialize, Serialize};

/// Organizer-chosen event identifier.
///
/// Event identifiers are globally unique: registration of an identifier that
/// is already present fails rather than upserting.
pub type EventId = String;

/// Global ticket sequence number.
///
/// Allocated monotonically starting at 1 and never reused. The allocator
/// lives behind the same write boundary as issuance, so ids stay dense and
/// collision-free.
pub type TicketId = u64;

/// Opaque account identifier.
///
/// Accounts identify event organizers, ticket buyers, and the ledger
/// administrator. The ledger attaches no meaning to the contents beyond
/// equality.
///
/// # Examples
///
/// ```
/// use boxoffice_core::types::AccountId;
///
/// let alice = AccountId::from("alice");
/// assert_eq!(alice.as_str(), "alice");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        AccountId(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        AccountId(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input descriptor for event registration.
///
/// Everything an organizer supplies besides the event id and their own
/// account. `name` and `image_uri` must be non-empty; `total_tickets` and
/// `ticket_price` must be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListing {
    /// Display name of the event.
    pub name: String,
    /// Date of the event, kept as an opaque descriptive string.
    pub date: String,
    /// Venue or location, descriptive only.
    pub location: String,
    /// Image reference embedded verbatim into ticket metadata.
    pub image_uri: String,
    /// Fixed ticket supply, immutable after registration.
    pub total_tickets: u64,
    /// Price per ticket in the smallest currency unit, immutable.
    pub ticket_price: u64,
}

/// The authoritative event descriptor held by the registry.
///
/// Identity and supply ceiling are immutable once registered; only
/// `remaining_tickets` changes, and it only decreases.
///
/// The `exists` flag distinguishes "never created" from "created": lookups
/// of unknown events through the tolerant `details` query return
/// `EventRecord::default()`, whose `exists` is `false`. Callers of that
/// query must check the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The organizer-chosen identifier this record is keyed by.
    pub event_id: EventId,
    /// Creator of the event; receives all ticket payments.
    pub owner: AccountId,
    /// Display name, non-empty.
    pub name: String,
    /// Date of the event, descriptive string.
    pub date: String,
    /// Venue or location, descriptive string.
    pub location: String,
    /// Image reference, non-empty, copied verbatim into ticket metadata.
    pub image_uri: String,
    /// Fixed supply ceiling, positive, immutable.
    pub total_tickets: u64,
    /// Price per ticket in the smallest currency unit, positive, immutable.
    pub ticket_price: u64,
    /// Tickets still available, in `[0, total_tickets]`, never increases.
    pub remaining_tickets: u64,
    /// Presence flag; `false` only on the zero-valued default record.
    pub exists: bool,
}

/// Per-event sale statistics.
///
/// `minted` is maintained as its own counter, independent of
/// `total_tickets - remaining_tickets`; the two must always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    /// Fixed supply ceiling.
    pub total_tickets: u64,
    /// Tickets issued so far.
    pub minted: u64,
    /// Tickets still available.
    pub remaining: u64,
    /// Price per ticket.
    pub ticket_price: u64,
}

/// An issued ticket.
///
/// Immutable once minted: no transfer, no deletion, no metadata refresh.
/// `token_uri` is the encoded metadata payload synthesized from the event's
/// descriptor at mint time and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Global sequence number of this ticket.
    pub ticket_id: TicketId,
    /// Event the ticket was issued against.
    pub event_id: EventId,
    /// Buyer the ticket is bound to.
    pub owner: AccountId,
    /// Self-contained encoded metadata document, never recomputed.
    pub token_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_round_trips_through_display() {
        let id = AccountId::from("organizer-7");
        assert_eq!(id.to_string(), "organizer-7");
        assert_eq!(AccountId::new(id.to_string()), id);
    }

    #[test]
    fn default_event_record_does_not_exist() {
        let record = EventRecord::default();
        assert!(!record.exists);
        assert_eq!(record.total_tickets, 0);
        assert_eq!(record.remaining_tickets, 0);
        assert!(record.owner.as_str().is_empty());
    }
}
