//! Externally observable notifications.
//!
//! Every committed mutation appends to an ordered, append-only notification
//! log. Notifications are emitted only after the whole operation has
//! committed; a rolled-back issuance leaves no trace in the log.
//!
//! ## Ordering
//!
//! The log is totally ordered. A successful sale appends `TicketIssued`
//! immediately followed by `PaymentReceived`; an event's `EventRegistered`
//! entry precedes every issuance against that event.

use crate::types::{AccountId, EventId, TicketId};
use serde::{Deserialize, Serialize};

/// A single entry in the append-only notification log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A new event was registered.
    EventRegistered {
        /// The organizer-chosen event identifier.
        event_id: EventId,
        /// Fixed ticket supply.
        total_tickets: u64,
        /// Price per ticket.
        ticket_price: u64,
        /// The organizer; receives all ticket payments.
        owner: AccountId,
        /// Image reference carried into ticket metadata.
        image_uri: String,
    },

    /// A ticket was issued and committed.
    TicketIssued {
        /// Global sequence number of the new ticket.
        ticket_id: TicketId,
        /// Event the ticket was issued against.
        event_id: EventId,
        /// The buyer the ticket is bound to.
        buyer: AccountId,
    },

    /// A buyer's payment was captured and forwarded.
    PaymentReceived {
        /// The paying account.
        payer: AccountId,
        /// Amount captured, always the exact ticket price.
        amount: u64,
    },
}
