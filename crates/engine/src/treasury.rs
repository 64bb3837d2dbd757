//! Treasury: residual balance and privileged withdrawal.
//!
//! Issuance always forwards the full payment to the event owner or fails
//! whole, so nothing accrues here per-event. The treasury only grows
//! through explicit deposits of stray value attached by the host.
//! Withdrawal is reserved to the administrator and moves the entire
//! balance in one transfer: it fails loudly and keeps the balance intact
//! if the collaborator cannot deliver, leaving the administrator to retry.

use crate::ledger::Ledger;
use boxoffice_core::error::{Error, Result};
use boxoffice_core::types::AccountId;
use tracing::{debug, warn};

impl Ledger {
    /// Credit stray value to the residual treasury balance.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the balance would exceed `u64::MAX`; the
    /// balance is left unchanged.
    pub fn deposit(&self, amount: u64) -> Result<()> {
        let mut state = self.state().write();
        state.treasury = state
            .treasury
            .checked_add(amount)
            .ok_or(Error::Overflow("treasury balance"))?;
        Ok(())
    }

    /// The current residual treasury balance.
    pub fn treasury_balance(&self) -> u64 {
        self.state().read().treasury
    }

    /// Withdraw the entire treasury balance to the administrator.
    ///
    /// Returns the amount transferred. The balance is zeroed only after
    /// the transfer succeeds; on a collaborator fault the operation fails
    /// with the balance exactly as before, and the administrator retries.
    ///
    /// # Errors
    ///
    /// - [`Error::NotOwner`] if `caller` is not the administrator
    /// - [`Error::NothingToWithdraw`] if the balance is zero
    /// - [`Error::PayoutFailed`] if the transfer faults; nothing changes
    pub fn withdraw(&self, caller: &AccountId) -> Result<u64> {
        let mut state = self.state().write();

        if caller != self.admin() {
            return Err(Error::NotOwner {
                caller: caller.clone(),
            });
        }
        let amount = state.treasury;
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        if let Err(fault) = self.payments().transfer(self.admin(), amount) {
            warn!(amount, %fault, "treasury withdrawal failed");
            return Err(Error::PayoutFailed {
                to: self.admin().clone(),
                amount,
                reason: fault.to_string(),
            });
        }
        state.treasury = 0;

        debug!(amount, admin = %self.admin(), "treasury withdrawn");
        Ok(amount)
    }
}
