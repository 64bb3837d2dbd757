//! Payment primitive: the host's value-transfer capability.
//!
//! The engine never moves funds itself; it orchestrates a collaborator
//! implementing [`PaymentLedger`]. Incoming value is the amount attached to
//! the purchase call and is captured by the engine; outbound forwarding
//! goes through [`PaymentLedger::transfer`], which may fail (destination
//! rejects, insufficient backing funds, transient fault) and must fail in
//! bounded time.
//!
//! ## Contract
//!
//! - `transfer` either delivers the full amount or returns a
//!   [`TransferFault`]; partial delivery is not a permitted outcome.
//! - `transfer` must not block indefinitely; the engine performs exactly
//!   one attempt per operation and never retries internally.
//! - A fault makes the engine roll back the surrounding operation, so
//!   implementations do not need to (and must not) apply compensating
//!   transfers of their own.

use boxoffice_core::types::AccountId;
use parking_lot::Mutex;
use std::collections::HashMap;
use thiserror::Error;

/// Fault reported by a payment ledger transfer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferFault {
    /// The destination account refused the funds.
    #[error("destination rejected the transfer: {0}")]
    Rejected(String),

    /// The backing ledger has insufficient funds to honor the transfer.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// A transient host fault; the transfer may succeed if retried later.
    #[error("transient transfer failure: {0}")]
    Transient(String),
}

/// The host's value-transfer capability.
///
/// Implementations move already-captured value to a destination account.
/// See the module docs for the full contract.
pub trait PaymentLedger: Send + Sync {
    /// Deliver `amount` to `to`, whole or not at all.
    fn transfer(&self, to: &AccountId, amount: u64) -> Result<(), TransferFault>;
}

/// In-process payment ledger.
///
/// Accumulates delivered amounts per destination account. This is the
/// default collaborator for embedded use; the balances it tracks are the
/// amounts the engine has successfully forwarded, queryable with
/// [`MemoryLedger::received`].
#[derive(Debug, Default)]
pub struct MemoryLedger {
    received: Mutex<HashMap<AccountId, u64>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total amount delivered to `account` so far.
    pub fn received(&self, account: &AccountId) -> u64 {
        self.received
            .lock()
            .get(account)
            .copied()
            .unwrap_or_default()
    }
}

impl PaymentLedger for MemoryLedger {
    fn transfer(&self, to: &AccountId, amount: u64) -> Result<(), TransferFault> {
        let mut received = self.received.lock();
        let balance = received.entry(to.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| TransferFault::Rejected("destination balance overflow".into()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfers_accumulate_per_account() {
        let ledger = MemoryLedger::new();
        let organizer = AccountId::from("organizer");
        let other = AccountId::from("other");

        ledger.transfer(&organizer, 100).unwrap();
        ledger.transfer(&organizer, 250).unwrap();
        ledger.transfer(&other, 5).unwrap();

        assert_eq!(ledger.received(&organizer), 350);
        assert_eq!(ledger.received(&other), 5);
        assert_eq!(ledger.received(&AccountId::from("nobody")), 0);
    }

    #[test]
    fn overflowing_transfer_faults_without_partial_credit() {
        let ledger = MemoryLedger::new();
        let account = AccountId::from("organizer");

        ledger.transfer(&account, u64::MAX).unwrap();
        let fault = ledger.transfer(&account, 1).unwrap_err();

        assert!(matches!(fault, TransferFault::Rejected(_)));
        assert_eq!(ledger.received(&account), u64::MAX);
    }
}
