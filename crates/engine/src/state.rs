//! In-memory ledger state.
//!
//! One struct owns everything the engine mutates: the event registry, the
//! ticket store, the per-account indices, the treasury balance, and the
//! notification log. The whole struct sits behind a single `RwLock` in
//! [`crate::Ledger`]; every field is only ever touched while holding that
//! lock, which is what makes the multi-step issuance unit atomic.

use boxoffice_core::notification::Notification;
use boxoffice_core::types::{AccountId, EventId, EventRecord, TicketId, TicketRecord};
use std::collections::{BTreeMap, HashMap, HashSet};

/// First ticket id ever allocated.
pub(crate) const FIRST_TICKET_ID: TicketId = 1;

/// All mutable ledger state.
///
/// Invariants maintained by the engine (asserted by the test suite after
/// every mutation):
///
/// - `events[e].remaining_tickets + minted[e] == events[e].total_tickets`
/// - `minted` and `events` always hold exactly the same key set
/// - the tickets recorded for an event number exactly `minted[e]`
/// - `membership` contains `(a, e)` iff `e` appears in `held[a]`, and an
///   event id appears at most once per held list
/// - `next_ticket_id` is one past the highest ticket ever committed
pub(crate) struct LedgerState {
    /// Event registry: descriptor per organizer-chosen id.
    pub events: HashMap<EventId, EventRecord>,

    /// Authoritative minted counter per event, maintained independently of
    /// `total - remaining`.
    pub minted: HashMap<EventId, u64>,

    /// Issued tickets by global sequence number.
    pub tickets: BTreeMap<TicketId, TicketRecord>,

    /// Next global ticket id to allocate.
    pub next_ticket_id: TicketId,

    /// Per-buyer held events, append-only, insertion order.
    pub held: HashMap<AccountId, Vec<EventId>>,

    /// One-ticket-per-buyer-per-event membership flags.
    pub membership: HashSet<(AccountId, EventId)>,

    /// Per-organizer hosted events, append-only, creation order.
    /// Reversal for most-recent-first reads happens at query time only.
    pub hosted: HashMap<AccountId, Vec<EventId>>,

    /// Residual collectible balance, not forwarded per-event.
    pub treasury: u64,

    /// Append-only, ordered notification log.
    pub notifications: Vec<Notification>,
}

impl LedgerState {
    pub fn new() -> Self {
        LedgerState {
            events: HashMap::new(),
            minted: HashMap::new(),
            tickets: BTreeMap::new(),
            next_ticket_id: FIRST_TICKET_ID,
            held: HashMap::new(),
            membership: HashSet::new(),
            hosted: HashMap::new(),
            treasury: 0,
            notifications: Vec::new(),
        }
    }
}
