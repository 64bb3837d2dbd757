//! Public types for the BoxOffice API.
//!
//! This module re-exports the domain types from the internal crates with a
//! clean public interface.

// Identifiers and records
pub use boxoffice_core::types::{
    AccountId, EventId, EventListing, EventRecord, EventStats, TicketId, TicketRecord,
};

// Notification stream entries
pub use boxoffice_core::notification::Notification;

// Metadata documents and payload codec
pub use boxoffice_engine::metadata::{
    decode as decode_metadata, AttributeValue, MetadataAttribute, TicketMetadata,
    METADATA_URI_PREFIX,
};

// Payment collaborator seam
pub use boxoffice_engine::payment::{MemoryLedger, PaymentLedger, TransferFault};
