//! Unified error types for the ticketing ledger.
//!
//! Every operation surfaces failures through the single [`Error`] enum.
//! The taxonomy has two classes:
//!
//! - **Validation errors** are detected before any state is mutated. The
//!   caller can retry with corrected input; nothing changed.
//! - **Fault errors** abort the whole operation and roll back any staged
//!   state, leaving the ledger exactly as before the call. The caller may
//!   retry later.
//!
//! No error is silently swallowed, and no failure path commits partial
//! state. Retries are a caller-level policy choice; the engine never
//! retries internally.
//!
//! | Variant | Class | Raised by |
//! |---------|-------|-----------|
//! | `DuplicateEvent`, `InvalidSupply`, `InvalidPrice`, `EmptyField` | validation | registration |
//! | `UnknownEvent`, `SoldOut`, `AlreadyHeld`, `WrongPayment` | validation | issuance (also `UnknownEvent` from strict queries) |
//! | `UnknownTicket` | validation | ticket queries |
//! | `NothingToWithdraw` | validation | treasury withdrawal |
//! | `PayoutFailed`, `NotOwner` | fault | payout forwarding, treasury withdrawal |

use crate::types::{AccountId, TicketId};
use thiserror::Error;

/// All ticketing ledger errors.
///
/// This is the canonical error type for every operation on the ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// An event with this identifier already exists; registration is not
    /// an upsert.
    #[error("event already exists: {id}")]
    DuplicateEvent {
        /// The contested event identifier.
        id: String,
    },

    /// Total ticket supply must be positive.
    #[error("total tickets must be greater than zero")]
    InvalidSupply,

    /// Ticket price must be positive.
    #[error("ticket price must be greater than zero")]
    InvalidPrice,

    /// A required descriptive field was empty at registration.
    #[error("required field is empty: {field}")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// No event with this identifier has been registered.
    #[error("unknown event: {id}")]
    UnknownEvent {
        /// The identifier that was looked up.
        id: String,
    },

    /// The event has no remaining tickets.
    #[error("event is sold out: {id}")]
    SoldOut {
        /// The sold-out event.
        id: String,
    },

    /// The buyer already holds a ticket for this event; one per buyer per
    /// event.
    #[error("account {account} already holds a ticket for event {id}")]
    AlreadyHeld {
        /// The event in question.
        id: String,
        /// The buyer that already holds a ticket.
        account: AccountId,
    },

    /// The attached payment does not match the ticket price exactly.
    /// Overpayment is rejected; there is no partial refund mechanism.
    #[error("wrong payment for event {id}: expected {expected}, offered {offered}")]
    WrongPayment {
        /// The event being purchased.
        id: String,
        /// The exact price required.
        expected: u64,
        /// The amount actually attached.
        offered: u64,
    },

    /// No ticket with this sequence number has been issued.
    #[error("unknown ticket: {ticket_id}")]
    UnknownTicket {
        /// The sequence number that was looked up.
        ticket_id: TicketId,
    },

    /// Outbound payment could not be delivered. The whole operation was
    /// rolled back; ticket state and fund state are never committed
    /// independently.
    #[error("payout of {amount} to {to} failed: {reason}")]
    PayoutFailed {
        /// Intended recipient of the funds.
        to: AccountId,
        /// Amount that failed to move.
        amount: u64,
        /// Collaborator-reported reason.
        reason: String,
    },

    /// Caller is not the ledger administrator.
    #[error("account {caller} is not the ledger administrator")]
    NotOwner {
        /// The rejected caller.
        caller: AccountId,
    },

    /// The collectible treasury balance is zero.
    #[error("treasury balance is zero")]
    NothingToWithdraw,

    /// Arithmetic overflow on a balance or counter.
    #[error("numeric overflow: {0}")]
    Overflow(&'static str),

    /// Ledger construction was misconfigured.
    #[error("configuration error: {0}")]
    Config(String),

    /// Metadata document could not be encoded or decoded.
    #[error("metadata serialization error: {0}")]
    Serialization(String),
}

/// Result type for ticketing ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation error.
    ///
    /// Validation errors are raised before any mutation; the caller can
    /// retry immediately with corrected input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::DuplicateEvent { .. }
                | Error::InvalidSupply
                | Error::InvalidPrice
                | Error::EmptyField { .. }
                | Error::UnknownEvent { .. }
                | Error::SoldOut { .. }
                | Error::AlreadyHeld { .. }
                | Error::WrongPayment { .. }
                | Error::UnknownTicket { .. }
                | Error::NothingToWithdraw
        )
    }

    /// Check if this is a fault error.
    ///
    /// Faults abort the whole operation with a full rollback; state is
    /// exactly as before the call.
    pub fn is_fault(&self) -> bool {
        matches!(self, Error::PayoutFailed { .. } | Error::NotOwner { .. })
    }

    /// Check if this error is retryable.
    ///
    /// A failed payout may succeed later once the destination recovers;
    /// retrying is the caller's choice, never the engine's.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::PayoutFailed { .. })
    }
}

// Convert from serde_json errors raised while encoding metadata documents
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_classes_are_disjoint() {
        let validation = Error::SoldOut { id: "E1".into() };
        let fault = Error::PayoutFailed {
            to: AccountId::from("organizer"),
            amount: 100,
            reason: "destination rejected".into(),
        };

        assert!(validation.is_validation());
        assert!(!validation.is_fault());
        assert!(fault.is_fault());
        assert!(!fault.is_validation());
    }

    #[test]
    fn only_payout_failures_are_retryable() {
        assert!(Error::PayoutFailed {
            to: AccountId::from("organizer"),
            amount: 1,
            reason: "transient".into(),
        }
        .is_retryable());
        assert!(!Error::NothingToWithdraw.is_retryable());
        assert!(!Error::InvalidPrice.is_retryable());
    }
}
