//! Core types for the BoxOffice ticketing ledger.
//!
//! This crate defines the domain vocabulary shared by the engine and the
//! public facade:
//!
//! - [`types`]: account/event/ticket identifiers and record structs
//! - [`error`]: the canonical [`Error`] taxonomy and [`Result`] alias
//! - [`notification`]: the externally observable [`Notification`] stream
//!
//! Nothing in this crate holds state or performs I/O; it is the pure
//! vocabulary layer underneath `boxoffice-engine`.

pub mod error;
pub mod notification;
pub mod types;

pub use error::{Error, Result};
pub use notification::Notification;
pub use types::{
    AccountId, EventId, EventListing, EventRecord, EventStats, TicketId, TicketRecord,
};
