//! Ticket metadata synthesis and encoding.
//!
//! Synthesis is a pure function from an event descriptor and a ticket
//! sequence number to a [`TicketMetadata`] document. The document carries
//! the ticket's display name, a description referencing the event, the
//! event's image reference verbatim, and exactly four attributes: date,
//! location, ticket number, and total supply.
//!
//! The document is encoded into a self-contained
//! `data:application/json;base64,` payload. The encoding is swappable in
//! principle; the logical content is fixed and must round-trip losslessly
//! through [`decode`]. Same input, byte-identical output: nothing here
//! reads clocks, randomness, or any state outside the arguments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use boxoffice_core::error::{Error, Result};
use boxoffice_core::types::{EventRecord, TicketId};
use serde::{Deserialize, Serialize};

/// URI scheme prefix of every encoded metadata payload.
pub const METADATA_URI_PREFIX: &str = "data:application/json;base64,";

/// Attribute name for the event date.
pub const ATTR_DATE: &str = "Date";
/// Attribute name for the event location.
pub const ATTR_LOCATION: &str = "Location";
/// Attribute name for the ticket sequence number.
pub const ATTR_TICKET_NUMBER: &str = "Ticket Number";
/// Attribute name for the fixed ticket supply.
pub const ATTR_TOTAL_TICKETS: &str = "Total Tickets";

/// A single descriptive attribute of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    /// Attribute name, one of the `ATTR_*` constants.
    pub trait_type: String,
    /// Attribute value, textual or numeric.
    pub value: AttributeValue,
}

/// An attribute value.
///
/// Numeric attributes (ticket number, total supply) stay numeric through
/// encode and decode; textual attributes stay textual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A numeric value.
    Number(u64),
    /// A textual value.
    Text(String),
}

/// The synthesized metadata document bound to an issued ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMetadata {
    /// Display name: event name plus ticket sequence number.
    pub name: String,
    /// Description referencing the event name.
    pub description: String,
    /// The event's image reference, verbatim.
    pub image: String,
    /// Exactly four attributes: date, location, ticket number, supply.
    pub attributes: Vec<MetadataAttribute>,
}

/// Synthesize the metadata document for one ticket.
///
/// Pure and deterministic over the descriptor fields and the sequence
/// number. The descriptor is read as it stands at mint time; the document
/// is never recomputed afterwards.
pub fn synthesize(event: &EventRecord, ticket_id: TicketId) -> TicketMetadata {
    TicketMetadata {
        name: format!("{} #{}", event.name, ticket_id),
        description: format!("Admission ticket #{} for {}", ticket_id, event.name),
        image: event.image_uri.clone(),
        attributes: vec![
            MetadataAttribute {
                trait_type: ATTR_DATE.to_string(),
                value: AttributeValue::Text(event.date.clone()),
            },
            MetadataAttribute {
                trait_type: ATTR_LOCATION.to_string(),
                value: AttributeValue::Text(event.location.clone()),
            },
            MetadataAttribute {
                trait_type: ATTR_TICKET_NUMBER.to_string(),
                value: AttributeValue::Number(ticket_id),
            },
            MetadataAttribute {
                trait_type: ATTR_TOTAL_TICKETS.to_string(),
                value: AttributeValue::Number(event.total_tickets),
            },
        ],
    }
}

/// Encode a metadata document as a self-contained payload.
pub fn encode(document: &TicketMetadata) -> Result<String> {
    let json = serde_json::to_vec(document)?;
    Ok(format!("{}{}", METADATA_URI_PREFIX, STANDARD.encode(json)))
}

/// Decode an encoded payload back into its metadata document.
///
/// Recovers exactly what [`encode`] produced; numeric attributes come back
/// numeric.
pub fn decode(uri: &str) -> Result<TicketMetadata> {
    let payload = uri
        .strip_prefix(METADATA_URI_PREFIX)
        .ok_or_else(|| Error::Serialization("missing metadata URI prefix".to_string()))?;
    let json = STANDARD
        .decode(payload)
        .map_err(|e| Error::Serialization(format!("invalid base64 payload: {}", e)))?;
    Ok(serde_json::from_slice(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> EventRecord {
        EventRecord {
            event_id: "rustconf-2026".to_string(),
            owner: "organizer".into(),
            name: "RustConf".to_string(),
            date: "2026-09-12".to_string(),
            location: "Portland".to_string(),
            image_uri: "ipfs://QmTicketArt".to_string(),
            total_tickets: 500,
            ticket_price: 125,
            remaining_tickets: 499,
            exists: true,
        }
    }

    #[test]
    fn document_content_is_synthesized_from_descriptor() {
        let doc = synthesize(&sample_event(), 2);

        assert_eq!(doc.name, "RustConf #2");
        assert_eq!(doc.description, "Admission ticket #2 for RustConf");
        assert_eq!(doc.image, "ipfs://QmTicketArt");
        assert_eq!(doc.attributes.len(), 4);
        assert_eq!(
            doc.attributes[2].value,
            AttributeValue::Number(2),
            "ticket number attribute must be numeric"
        );
        assert_eq!(doc.attributes[3].value, AttributeValue::Number(500));
    }

    #[test]
    fn synthesis_is_deterministic_and_byte_identical() {
        let event = sample_event();
        let a = encode(&synthesize(&event, 7)).unwrap();
        let b = encode(&synthesize(&event, 7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn encoded_payload_round_trips_losslessly() {
        let doc = synthesize(&sample_event(), 42);
        let uri = encode(&doc).unwrap();

        assert!(uri.starts_with(METADATA_URI_PREFIX));
        let decoded = decode(&uri).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn attribute_order_is_fixed() {
        let doc = synthesize(&sample_event(), 1);
        let names: Vec<&str> = doc
            .attributes
            .iter()
            .map(|a| a.trait_type.as_str())
            .collect();
        assert_eq!(
            names,
            vec![ATTR_DATE, ATTR_LOCATION, ATTR_TICKET_NUMBER, ATTR_TOTAL_TICKETS]
        );
    }

    #[test]
    fn decode_rejects_foreign_uris() {
        assert!(decode("https://example.com/metadata.json").is_err());
        assert!(decode("data:application/json;base64,!!!not-base64!!!").is_err());
    }
}
