//! Main ledger entry point.
//!
//! This module provides the [`BoxOffice`] struct, the primary entry point
//! for all ticketing operations, and its builder.

use crate::error::{Error, Result};
use crate::surfaces::{Events, Notifications, Tickets, Treasury};
use crate::types::{AccountId, MemoryLedger, PaymentLedger};
use std::sync::Arc;

/// The BoxOffice ticketing ledger.
///
/// This is the main entry point. Create one with [`BoxOffice::new`] for an
/// in-process payment ledger, or [`BoxOffice::builder`] to inject a custom
/// payment collaborator.
///
/// # Example
///
/// ```ignore
/// use boxoffice::prelude::*;
///
/// let office = BoxOffice::new("admin");
///
/// // Access surfaces
/// office.events.register("E1", &AccountId::from("org"), listing)?;
/// office.tickets.issue("E1", &AccountId::from("alice"), 100)?;
/// let log = office.notifications.all();
/// ```
pub struct BoxOffice {
    /// The underlying ledger engine
    pub(crate) inner: Arc<boxoffice_engine::Ledger>,

    /// Event registration and event-level queries
    pub events: Events,

    /// Ticket issuance and ticket-level queries
    pub tickets: Tickets,

    /// Residual balance and privileged withdrawal
    pub treasury: Treasury,

    /// The append-only notification log
    pub notifications: Notifications,
}

impl BoxOffice {
    /// Create a ledger with the in-process [`MemoryLedger`] collaborator.
    ///
    /// `admin` is the only account allowed to withdraw the treasury.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let office = BoxOffice::new("admin");
    /// ```
    pub fn new(admin: impl Into<AccountId>) -> Self {
        Self::from_engine(Arc::new(boxoffice_engine::Ledger::new(
            admin.into(),
            Arc::new(MemoryLedger::new()),
        )))
    }

    /// Create a builder for ledger configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let payments = Arc::new(MemoryLedger::new());
    /// let office = BoxOffice::builder()
    ///     .admin("admin")
    ///     .payments(payments.clone())
    ///     .build()?;
    /// ```
    pub fn builder() -> BoxOfficeBuilder {
        BoxOfficeBuilder::new()
    }

    /// The administrator account.
    pub fn admin(&self) -> &AccountId {
        self.inner.admin()
    }

    /// Create BoxOffice from an engine Ledger.
    fn from_engine(ledger: Arc<boxoffice_engine::Ledger>) -> Self {
        Self {
            events: Events::new(ledger.clone()),
            tickets: Tickets::new(ledger.clone()),
            treasury: Treasury::new(ledger.clone()),
            notifications: Notifications::new(ledger.clone()),
            inner: ledger,
        }
    }
}

/// Builder for ledger configuration.
///
/// # Example
///
/// ```ignore
/// // Embedded use: in-process payments
/// let office = BoxOffice::new("admin");
///
/// // Custom host integration: inject the payment capability
/// let office = BoxOffice::builder()
///     .admin("admin")
///     .payments(Arc::new(MyHostLedger::connect()?))
///     .build()?;
/// ```
pub struct BoxOfficeBuilder {
    admin: Option<AccountId>,
    payments: Option<Arc<dyn PaymentLedger>>,
}

impl BoxOfficeBuilder {
    /// Create a new builder with no administrator and in-process payments.
    pub fn new() -> Self {
        Self {
            admin: None,
            payments: None,
        }
    }

    /// Set the administrator account. Required.
    pub fn admin(mut self, admin: impl Into<AccountId>) -> Self {
        self.admin = Some(admin.into());
        self
    }

    /// Inject the host's payment capability.
    ///
    /// Defaults to a fresh [`MemoryLedger`] when not set.
    pub fn payments(mut self, payments: Arc<dyn PaymentLedger>) -> Self {
        self.payments = Some(payments);
        self
    }

    /// Build the ledger.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if no administrator account was set.
    pub fn build(self) -> Result<BoxOffice> {
        let admin = self
            .admin
            .ok_or_else(|| Error::Config("administrator account is required".to_string()))?;
        let payments = self
            .payments
            .unwrap_or_else(|| Arc::new(MemoryLedger::new()));
        Ok(BoxOffice::from_engine(Arc::new(
            boxoffice_engine::Ledger::new(admin, payments),
        )))
    }
}

impl Default for BoxOfficeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
