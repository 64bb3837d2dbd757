//! Residual treasury balance and privileged withdrawal.
//!
//! Access via `office.treasury`.

use crate::error::Result;
use crate::types::AccountId;
use std::sync::Arc;

/// Treasury operations.
///
/// Access via `office.treasury`.
pub struct Treasury {
    ledger: Arc<boxoffice_engine::Ledger>,
}

impl Treasury {
    pub(crate) fn new(ledger: Arc<boxoffice_engine::Ledger>) -> Self {
        Self { ledger }
    }

    /// Credit stray value to the residual balance.
    ///
    /// Ticket payments never land here; they are forwarded to event
    /// owners inside the purchase transaction.
    pub fn deposit(&self, amount: u64) -> Result<()> {
        self.ledger.deposit(amount)
    }

    /// The current residual balance.
    pub fn balance(&self) -> u64 {
        self.ledger.treasury_balance()
    }

    /// Withdraw the entire residual balance to the administrator.
    ///
    /// Returns the amount transferred. Only the administrator may call
    /// this; a transfer fault fails the operation loudly and leaves the
    /// balance intact for a retry.
    pub fn withdraw(&self, caller: &AccountId) -> Result<u64> {
        self.ledger.withdraw(caller)
    }
}
