//! Per-concern operation handles.
//!
//! Each handle is a thin facade over the shared engine: [`Events`] for the
//! registry, [`Tickets`] for issuance, [`Treasury`] for the residual
//! balance, [`Notifications`] for the observable log. Handles hold an
//! `Arc` of the engine and are accessed as fields of
//! [`crate::BoxOffice`].

mod events;
mod notifications;
mod tickets;
mod treasury;

pub use events::Events;
pub use notifications::Notifications;
pub use tickets::Tickets;
pub use treasury::Treasury;
