//! The ledger: shared state, locking discipline, and notification reads.
//!
//! [`Ledger`] owns the full ticketing state behind one `RwLock` and holds
//! the payment collaborator plus the administrator identity. Mutating
//! operations (registration, issuance, deposit, withdrawal) live in their
//! own modules as further `impl Ledger` blocks; each takes the write guard
//! once and holds it from validation through commit or rollback. That
//! single-writer discipline is the whole concurrency story: no operation
//! interleaves with another, and ticket-id allocation happens behind the
//! same boundary, so ids never collide.

use crate::payment::PaymentLedger;
use crate::state::LedgerState;
use boxoffice_core::notification::Notification;
use boxoffice_core::types::AccountId;
use parking_lot::RwLock;
use std::sync::Arc;

/// The ticketing ledger engine.
///
/// Cheap to share: the facade wraps it in an `Arc` and hands clones to its
/// per-concern handles.
pub struct Ledger {
    admin: AccountId,
    payments: Arc<dyn PaymentLedger>,
    state: RwLock<LedgerState>,
}

impl Ledger {
    /// Create an empty ledger.
    ///
    /// `admin` is the only account allowed to withdraw the residual
    /// treasury balance. `payments` is the host's value-transfer
    /// capability; every payout the engine performs goes through it.
    pub fn new(admin: AccountId, payments: Arc<dyn PaymentLedger>) -> Self {
        Ledger {
            admin,
            payments,
            state: RwLock::new(LedgerState::new()),
        }
    }

    /// The administrator account.
    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    pub(crate) fn payments(&self) -> &dyn PaymentLedger {
        self.payments.as_ref()
    }

    pub(crate) fn state(&self) -> &RwLock<LedgerState> {
        &self.state
    }

    // =========================================================================
    // Notification log (read-only)
    // =========================================================================

    /// The full notification log, in append order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state.read().notifications.clone()
    }

    /// Log entries from `offset` onward (empty when `offset` is past the
    /// end). Useful for incremental observers.
    pub fn notifications_since(&self, offset: usize) -> Vec<Notification> {
        let state = self.state.read();
        state
            .notifications
            .get(offset..)
            .map(<[Notification]>::to_vec)
            .unwrap_or_default()
    }

    /// Number of entries in the notification log.
    pub fn notification_count(&self) -> usize {
        self.state.read().notifications.len()
    }
}
