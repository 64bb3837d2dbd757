//! Event registry: registration and event-level queries.
//!
//! The registry is a string-keyed map with an explicit presence check.
//! Registration is not an upsert: a taken identifier fails with
//! `DuplicateEvent`, and the descriptor, the minted counter, and the
//! organizer's hosted-index entry land together under one write guard or
//! not at all.
//!
//! ## Query strictness
//!
//! `details` is tolerant: an unknown id yields the zero-valued descriptor
//! with `exists == false`, and callers must check the flag. `stats`,
//! `minted_count`, and `price` are strict and fail with `UnknownEvent`.
//! The asymmetry is contractual; both behaviors are pinned by tests.

use crate::ledger::Ledger;
use boxoffice_core::error::{Error, Result};
use boxoffice_core::notification::Notification;
use boxoffice_core::types::{AccountId, EventId, EventListing, EventRecord, EventStats};
use tracing::debug;

impl Ledger {
    /// Register a new event.
    ///
    /// Validates the listing, then atomically stores the descriptor with
    /// `remaining == total`, initializes the minted counter to zero,
    /// appends the id to the organizer's hosted-events index, and appends
    /// an [`Notification::EventRegistered`] entry to the log.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateEvent`] if `event_id` is already registered
    /// - [`Error::InvalidSupply`] if `listing.total_tickets` is zero
    /// - [`Error::InvalidPrice`] if `listing.ticket_price` is zero
    /// - [`Error::EmptyField`] if the name or image reference is empty
    pub fn register_event(
        &self,
        event_id: &str,
        organizer: &AccountId,
        listing: EventListing,
    ) -> Result<()> {
        let mut guard = self.state().write();
        let state = &mut *guard;

        if state.events.contains_key(event_id) {
            return Err(Error::DuplicateEvent {
                id: event_id.to_string(),
            });
        }
        if listing.total_tickets == 0 {
            return Err(Error::InvalidSupply);
        }
        if listing.ticket_price == 0 {
            return Err(Error::InvalidPrice);
        }
        if listing.name.is_empty() {
            return Err(Error::EmptyField { field: "name" });
        }
        if listing.image_uri.is_empty() {
            return Err(Error::EmptyField { field: "image_uri" });
        }

        let record = EventRecord {
            event_id: event_id.to_string(),
            owner: organizer.clone(),
            name: listing.name,
            date: listing.date,
            location: listing.location,
            image_uri: listing.image_uri,
            total_tickets: listing.total_tickets,
            ticket_price: listing.ticket_price,
            remaining_tickets: listing.total_tickets,
            exists: true,
        };

        state.minted.insert(record.event_id.clone(), 0);
        state
            .hosted
            .entry(organizer.clone())
            .or_default()
            .push(record.event_id.clone());
        state.notifications.push(Notification::EventRegistered {
            event_id: record.event_id.clone(),
            total_tickets: record.total_tickets,
            ticket_price: record.ticket_price,
            owner: record.owner.clone(),
            image_uri: record.image_uri.clone(),
        });
        state.events.insert(record.event_id.clone(), record);

        debug!(event = event_id, organizer = %organizer, "event registered");
        Ok(())
    }

    // =========================================================================
    // Event queries
    // =========================================================================

    /// Full descriptor for an event.
    ///
    /// Tolerant by contract: an unknown id returns the zero-valued
    /// descriptor (`exists == false`) rather than failing.
    pub fn details(&self, event_id: &str) -> EventRecord {
        self.state()
            .read()
            .events
            .get(event_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Sale statistics for an event. Strict: fails on unknown ids.
    pub fn stats(&self, event_id: &str) -> Result<EventStats> {
        let state = self.state().read();
        let event = state.events.get(event_id).ok_or_else(|| Error::UnknownEvent {
            id: event_id.to_string(),
        })?;
        let minted = state.minted.get(event_id).copied().unwrap_or_default();
        Ok(EventStats {
            total_tickets: event.total_tickets,
            minted,
            remaining: event.remaining_tickets,
            ticket_price: event.ticket_price,
        })
    }

    /// The authoritative minted counter. Strict: fails on unknown ids.
    pub fn minted_count(&self, event_id: &str) -> Result<u64> {
        self.state()
            .read()
            .minted
            .get(event_id)
            .copied()
            .ok_or_else(|| Error::UnknownEvent {
                id: event_id.to_string(),
            })
    }

    /// Ticket price for an event. Strict: fails on unknown ids.
    pub fn price(&self, event_id: &str) -> Result<u64> {
        let state = self.state().read();
        state
            .events
            .get(event_id)
            .map(|event| event.ticket_price)
            .ok_or_else(|| Error::UnknownEvent {
                id: event_id.to_string(),
            })
    }

    /// Events created by `organizer`, most recently registered first.
    ///
    /// The hosted index itself is append-only in creation order; the
    /// reversal happens here, at query time.
    pub fn hosted_events(&self, organizer: &AccountId) -> Vec<EventId> {
        let state = self.state().read();
        state
            .hosted
            .get(organizer)
            .map(|ids| ids.iter().rev().cloned().collect())
            .unwrap_or_default()
    }
}
