//! Ticketing ledger engine.
//!
//! This crate implements the issuance and inventory engine behind the
//! `boxoffice` facade:
//!
//! - **Event registry**: the string-keyed map of event descriptors and the
//!   authoritative remaining-supply counters (registration and event
//!   queries on [`Ledger`]).
//! - **Issuance engine**: validation, atomic supply decrement, global
//!   ticket-id allocation, metadata synthesis, index maintenance, and
//!   payment forwarding, all inside one write transaction (issuance
//!   methods on [`Ledger`]).
//! - **Metadata synthesizer**: pure, deterministic document synthesis and
//!   the self-contained base64 payload codec ([`metadata`]).
//! - **Payment primitive**: the host's value-transfer capability behind
//!   the [`PaymentLedger`] trait, with [`MemoryLedger`] as the in-process
//!   implementation.
//! - **Treasury**: residual balance and the privileged withdrawal path.
//!
//! ## Atomicity
//!
//! The engine re-derives the one-transaction-at-a-time execution model
//! explicitly: a single `parking_lot::RwLock` write guard spans every
//! mutating operation from validation through payout. Payout is the last
//! step inside the guard; if it faults, the staged mutations are undone in
//! reverse order before the guard is released, so ticket state and fund
//! state commit together or not at all. Queries take read guards and see
//! only committed state.

mod issuance;
mod ledger;
mod registry;
mod state;
mod treasury;

pub mod metadata;
pub mod payment;

pub use ledger::Ledger;
pub use metadata::{AttributeValue, MetadataAttribute, TicketMetadata};
pub use payment::{MemoryLedger, PaymentLedger, TransferFault};
