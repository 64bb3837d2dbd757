//! # BoxOffice
//!
//! Embedded event-ticketing ledger with exact-once issuance.
//!
//! Organizers register events with a fixed ticket supply and price; buyers
//! purchase tickets, each purchase minting a unique ticket record bound to
//! the buyer and carrying embedded descriptive metadata. The engine
//! guarantees exact-once issuance and correct fund movement: no
//! overselling, no double-issuance per buyer and event, and no ticket ever
//! committed without its payment delivered.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boxoffice::prelude::*;
//!
//! let office = BoxOffice::new("admin");
//! let organizer = AccountId::from("organizer");
//! let buyer = AccountId::from("alice");
//!
//! office.events.register("rustconf", &organizer, EventListing {
//!     name: "RustConf".into(),
//!     date: "2026-09-12".into(),
//!     location: "Portland".into(),
//!     image_uri: "ipfs://QmTicketArt".into(),
//!     total_tickets: 500,
//!     ticket_price: 125,
//! })?;
//!
//! let ticket = office.tickets.issue("rustconf", &buyer, 125)?;
//! assert!(office.tickets.has_ticket(&buyer, "rustconf"));
//! assert_eq!(office.events.stats("rustconf")?.minted, 1);
//! ```
//!
//! ## Surfaces
//!
//! The API is split into per-concern handles on [`BoxOffice`]:
//!
//! - [`Events`] - event registration and event-level queries
//! - [`Tickets`] - ticket issuance and ticket-level queries
//! - [`Treasury`] - residual balance and privileged withdrawal
//! - [`Notifications`] - the append-only, ordered notification log
//!
//! ## Atomicity
//!
//! Every mutating operation runs as one transaction: validation, state
//! changes, and payment forwarding commit together or not at all. A payout
//! fault rolls the whole purchase back; the caller sees
//! [`Error::PayoutFailed`] and state exactly as before the call.

#![warn(missing_docs)]

mod error;
mod ledger;
mod surfaces;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use ledger::{BoxOffice, BoxOfficeBuilder};

// Re-export surfaces
pub use surfaces::{Events, Notifications, Tickets, Treasury};

// Re-export types
pub use types::*;
