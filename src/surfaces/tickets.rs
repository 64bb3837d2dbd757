//! Ticket issuance and ticket-level queries.
//!
//! Access via `office.tickets`.

use crate::error::Result;
use crate::types::{AccountId, EventId, TicketId, TicketMetadata, TicketRecord};
use std::sync::Arc;

/// Ticket operations.
///
/// Access via `office.tickets`.
pub struct Tickets {
    ledger: Arc<boxoffice_engine::Ledger>,
}

impl Tickets {
    pub(crate) fn new(ledger: Arc<boxoffice_engine::Ledger>) -> Self {
        Self { ledger }
    }

    /// Purchase one ticket for `event_id`, paying exactly the ticket
    /// price.
    ///
    /// Runs as one transaction: validation, supply decrement, ticket
    /// minting, index updates, and forwarding of the full payment to the
    /// event owner commit together or not at all. Returns the new global
    /// ticket id.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let ticket = office.tickets.issue("rustconf", &buyer, 125)?;
    /// assert_eq!(office.tickets.owner_of(ticket)?, buyer);
    /// ```
    pub fn issue(&self, event_id: &str, buyer: &AccountId, payment: u64) -> Result<TicketId> {
        self.ledger.issue_ticket(event_id, buyer, payment)
    }

    /// Events `account` holds a ticket for, in purchase order.
    pub fn held_by(&self, account: &AccountId) -> Vec<EventId> {
        self.ledger.held_events(account)
    }

    /// Whether `account` holds a ticket for `event_id`.
    pub fn has_ticket(&self, account: &AccountId, event_id: &str) -> bool {
        self.ledger.has_ticket(account, event_id)
    }

    /// Owner of an issued ticket.
    ///
    /// Strict: fails with `UnknownTicket` on unissued ids.
    pub fn owner_of(&self, ticket_id: TicketId) -> Result<AccountId> {
        self.ledger.owner_of(ticket_id)
    }

    /// The encoded metadata payload bound to a ticket at mint time.
    ///
    /// Stored verbatim, never recomputed.
    pub fn token_uri(&self, ticket_id: TicketId) -> Result<String> {
        self.ledger.token_uri(ticket_id)
    }

    /// The decoded metadata document for a ticket.
    pub fn metadata(&self, ticket_id: TicketId) -> Result<TicketMetadata> {
        let uri = self.ledger.token_uri(ticket_id)?;
        boxoffice_engine::metadata::decode(&uri)
    }

    /// The full ticket record.
    ///
    /// Strict: fails with `UnknownTicket` on unissued ids.
    pub fn record(&self, ticket_id: TicketId) -> Result<TicketRecord> {
        self.ledger.ticket(ticket_id)
    }
}
