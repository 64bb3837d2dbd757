//! The append-only notification log.
//!
//! Access via `office.notifications`.

use crate::types::Notification;
use std::sync::Arc;

/// Notification log reads.
///
/// The log is ordered and append-only; entries appear only for committed
/// operations. Access via `office.notifications`.
pub struct Notifications {
    ledger: Arc<boxoffice_engine::Ledger>,
}

impl Notifications {
    pub(crate) fn new(ledger: Arc<boxoffice_engine::Ledger>) -> Self {
        Self { ledger }
    }

    /// The full log, in append order.
    pub fn all(&self) -> Vec<Notification> {
        self.ledger.notifications()
    }

    /// Entries from `offset` onward; empty when past the end.
    pub fn since(&self, offset: usize) -> Vec<Notification> {
        self.ledger.notifications_since(offset)
    }

    /// Number of entries in the log.
    pub fn len(&self) -> usize {
        self.ledger.notification_count()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.ledger.notification_count() == 0
    }
}
