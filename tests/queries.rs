//! Query surface tests.
//!
//! Read-only accessors, their insertion/reversal ordering, and the
//! strict-versus-tolerant lookup asymmetry.

use boxoffice::prelude::*;

fn listing(total: u64, price: u64) -> EventListing {
    EventListing {
        name: "RustConf".to_string(),
        date: "2026-09-12".to_string(),
        location: "Portland".to_string(),
        image_uri: "ipfs://QmTicketArt".to_string(),
        total_tickets: total,
        ticket_price: price,
    }
}

// ============================================================================
// Strict vs tolerant lookups
// ============================================================================

#[test]
fn details_is_tolerant_of_unknown_events() {
    let office = BoxOffice::new("admin");

    let record = office.events.details("missing");
    assert!(!record.exists);
    assert_eq!(record, EventRecord::default());
}

#[test]
fn stats_minted_count_and_price_are_strict() {
    let office = BoxOffice::new("admin");

    assert!(matches!(
        office.events.stats("missing").unwrap_err(),
        Error::UnknownEvent { ref id } if id == "missing"
    ));
    assert!(matches!(
        office.events.minted_count("missing").unwrap_err(),
        Error::UnknownEvent { .. }
    ));
    assert!(matches!(
        office.events.price("missing").unwrap_err(),
        Error::UnknownEvent { .. }
    ));
}

#[test]
fn ticket_lookups_are_strict() {
    let office = BoxOffice::new("admin");

    assert!(matches!(
        office.tickets.owner_of(1).unwrap_err(),
        Error::UnknownTicket { ticket_id: 1 }
    ));
    assert!(matches!(
        office.tickets.token_uri(7).unwrap_err(),
        Error::UnknownTicket { ticket_id: 7 }
    ));
    assert!(office.tickets.record(1).is_err());
}

// ============================================================================
// Holdings
// ============================================================================

#[test]
fn held_events_keeps_purchase_order() {
    let office = BoxOffice::new("admin");
    let organizer = AccountId::from("organizer");
    let buyer = AccountId::from("alice");

    for id in ["A", "B", "C"] {
        office.events.register(id, &organizer, listing(5, 10)).unwrap();
    }
    office.tickets.issue("B", &buyer, 10).unwrap();
    office.tickets.issue("A", &buyer, 10).unwrap();
    office.tickets.issue("C", &buyer, 10).unwrap();

    assert_eq!(
        office.tickets.held_by(&buyer),
        vec!["B".to_string(), "A".to_string(), "C".to_string()]
    );
}

#[test]
fn has_ticket_tracks_membership_exactly() {
    let office = BoxOffice::new("admin");
    let organizer = AccountId::from("organizer");
    let alice = AccountId::from("alice");
    let bob = AccountId::from("bob");

    office.events.register("E1", &organizer, listing(5, 10)).unwrap();
    office.tickets.issue("E1", &alice, 10).unwrap();

    assert!(office.tickets.has_ticket(&alice, "E1"));
    assert!(!office.tickets.has_ticket(&bob, "E1"));
    assert!(!office.tickets.has_ticket(&alice, "E2"));
}

#[test]
fn empty_accounts_have_empty_holdings() {
    let office = BoxOffice::new("admin");
    let nobody = AccountId::from("nobody");

    assert!(office.tickets.held_by(&nobody).is_empty());
    assert!(office.events.hosted_by(&nobody).is_empty());
}

// ============================================================================
// Stats coherence
// ============================================================================

#[test]
fn stats_and_minted_count_agree_with_details() {
    let office = BoxOffice::new("admin");
    let organizer = AccountId::from("organizer");

    office.events.register("E1", &organizer, listing(4, 25)).unwrap();
    office.tickets.issue("E1", &AccountId::from("a"), 25).unwrap();
    office.tickets.issue("E1", &AccountId::from("b"), 25).unwrap();

    let stats = office.events.stats("E1").unwrap();
    let record = office.events.details("E1");

    assert_eq!(stats.total_tickets, record.total_tickets);
    assert_eq!(stats.remaining, record.remaining_tickets);
    assert_eq!(stats.minted, office.events.minted_count("E1").unwrap());
    assert_eq!(stats.minted, 2);
    assert_eq!(stats.ticket_price, office.events.price("E1").unwrap());
    assert_eq!(stats.remaining + stats.minted, stats.total_tickets);
}

#[test]
fn queries_never_mutate() {
    let office = BoxOffice::new("admin");
    let organizer = AccountId::from("organizer");
    let buyer = AccountId::from("alice");

    office.events.register("E1", &organizer, listing(3, 10)).unwrap();
    office.tickets.issue("E1", &buyer, 10).unwrap();

    let stats = office.events.stats("E1").unwrap();
    let log_len = office.notifications.len();

    for _ in 0..3 {
        let _ = office.events.details("E1");
        let _ = office.events.stats("E1").unwrap();
        let _ = office.events.minted_count("E1").unwrap();
        let _ = office.events.price("E1").unwrap();
        let _ = office.events.hosted_by(&organizer);
        let _ = office.tickets.held_by(&buyer);
        let _ = office.tickets.has_ticket(&buyer, "E1");
        let _ = office.tickets.owner_of(1).unwrap();
        let _ = office.notifications.all();
    }

    assert_eq!(office.events.stats("E1").unwrap(), stats);
    assert_eq!(office.notifications.len(), log_len);
}
