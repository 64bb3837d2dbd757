//! Event registration and event-level queries.
//!
//! Access via `office.events`.

use crate::error::Result;
use crate::types::{AccountId, EventId, EventListing, EventRecord, EventStats};
use std::sync::Arc;

/// Event registry operations.
///
/// Access via `office.events`.
pub struct Events {
    ledger: Arc<boxoffice_engine::Ledger>,
}

impl Events {
    pub(crate) fn new(ledger: Arc<boxoffice_engine::Ledger>) -> Self {
        Self { ledger }
    }

    /// Register a new event.
    ///
    /// The identifier is organizer-chosen and globally unique; a taken id
    /// fails with `DuplicateEvent` rather than upserting. On success the
    /// event starts with its full supply remaining and an
    /// `EventRegistered` notification is appended.
    ///
    /// # Example
    ///
    /// ```ignore
    /// office.events.register("rustconf", &organizer, EventListing {
    ///     name: "RustConf".into(),
    ///     date: "2026-09-12".into(),
    ///     location: "Portland".into(),
    ///     image_uri: "ipfs://QmTicketArt".into(),
    ///     total_tickets: 500,
    ///     ticket_price: 125,
    /// })?;
    /// ```
    pub fn register(
        &self,
        event_id: &str,
        organizer: &AccountId,
        listing: EventListing,
    ) -> Result<()> {
        self.ledger.register_event(event_id, organizer, listing)
    }

    /// Full descriptor for an event.
    ///
    /// Tolerant: an unknown id returns the zero-valued descriptor with
    /// `exists == false`. Check the flag.
    pub fn details(&self, event_id: &str) -> EventRecord {
        self.ledger.details(event_id)
    }

    /// Sale statistics: total, minted, remaining, price.
    ///
    /// Strict: fails with `UnknownEvent` on unregistered ids.
    pub fn stats(&self, event_id: &str) -> Result<EventStats> {
        self.ledger.stats(event_id)
    }

    /// Tickets minted so far, from the authoritative counter.
    ///
    /// Strict: fails with `UnknownEvent` on unregistered ids.
    pub fn minted_count(&self, event_id: &str) -> Result<u64> {
        self.ledger.minted_count(event_id)
    }

    /// Ticket price.
    ///
    /// Strict: fails with `UnknownEvent` on unregistered ids.
    pub fn price(&self, event_id: &str) -> Result<u64> {
        self.ledger.price(event_id)
    }

    /// Events hosted by `organizer`, most recently registered first.
    pub fn hosted_by(&self, organizer: &AccountId) -> Vec<EventId> {
        self.ledger.hosted_events(organizer)
    }
}
