//! Convenient imports for BoxOffice.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use boxoffice::prelude::*;
//!
//! let office = BoxOffice::new("admin");
//! office.events.register("E1", &AccountId::from("org"), listing)?;
//! ```

// Main entry point
pub use crate::ledger::{BoxOffice, BoxOfficeBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Identifiers and records
pub use crate::types::{AccountId, EventId, EventListing, EventRecord, EventStats, TicketId};

// Notifications
pub use crate::types::Notification;

// Metadata documents
pub use crate::types::{AttributeValue, TicketMetadata};

// Payment seam
pub use crate::types::{MemoryLedger, PaymentLedger, TransferFault};
