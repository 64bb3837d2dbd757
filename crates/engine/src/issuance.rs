//! Issuance engine: purchase orchestration and ticket-level queries.
//!
//! A purchase validates in a fixed order (unknown event, sold out, already
//! held, wrong payment), stopping at the first failure with nothing
//! mutated. Once validation passes, the whole unit (id allocation,
//! metadata synthesis, ticket recording, index updates, supply decrement,
//! minted increment, payment forwarding) executes under the write guard
//! as one atomic transaction.
//!
//! ## Rollback boundary
//!
//! Payout is deliberately the last step, so the irreversible window is as
//! small as the host allows. If the payment collaborator faults, every
//! staged mutation is undone in reverse order while the guard is still
//! held, including the ticket-id allocation: ticket state and fund state
//! are coupled and never commit independently. The collaborator gets
//! exactly one attempt; retrying is the caller's policy.

use crate::ledger::Ledger;
use crate::metadata;
use boxoffice_core::error::{Error, Result};
use boxoffice_core::notification::Notification;
use boxoffice_core::types::{AccountId, EventId, TicketId, TicketRecord};
use tracing::{debug, warn};

impl Ledger {
    /// Issue one ticket for `event_id` to `buyer`, capturing `payment`.
    ///
    /// `payment` must equal the ticket price exactly; overpayment is
    /// rejected because no partial-refund mechanism exists. On success the
    /// full amount has been forwarded to the event owner and the new
    /// global ticket id is returned.
    ///
    /// # Errors
    ///
    /// Validation, in order, nothing mutated: [`Error::UnknownEvent`],
    /// [`Error::SoldOut`], [`Error::AlreadyHeld`], [`Error::WrongPayment`].
    /// Fault: [`Error::PayoutFailed`] when the collaborator cannot deliver
    /// the funds; the whole transaction is rolled back.
    pub fn issue_ticket(
        &self,
        event_id: &str,
        buyer: &AccountId,
        payment: u64,
    ) -> Result<TicketId> {
        let mut guard = self.state().write();
        let state = &mut *guard;

        // Ordered validation; the first failure aborts untouched.
        let event = match state.events.get_mut(event_id) {
            Some(event) => event,
            None => {
                return Err(Error::UnknownEvent {
                    id: event_id.to_string(),
                })
            }
        };
        if event.remaining_tickets == 0 {
            return Err(Error::SoldOut {
                id: event_id.to_string(),
            });
        }
        if state
            .membership
            .contains(&(buyer.clone(), event_id.to_string()))
        {
            return Err(Error::AlreadyHeld {
                id: event_id.to_string(),
                account: buyer.clone(),
            });
        }
        if payment != event.ticket_price {
            return Err(Error::WrongPayment {
                id: event_id.to_string(),
                expected: event.ticket_price,
                offered: payment,
            });
        }

        // (a) allocate the next global ticket id, (b) synthesize metadata
        // from the descriptor as it stands right now. Encoding is fallible
        // and runs before any mutation.
        let ticket_id = state.next_ticket_id;
        let token_uri = metadata::encode(&metadata::synthesize(event, ticket_id))?;
        let owner = event.owner.clone();

        // (c)-(g): stage the ticket, the indices, and the counters.
        event.remaining_tickets -= 1;
        state.next_ticket_id += 1;
        state.tickets.insert(
            ticket_id,
            TicketRecord {
                ticket_id,
                event_id: event_id.to_string(),
                owner: buyer.clone(),
                token_uri,
            },
        );
        if let Some(minted) = state.minted.get_mut(event_id) {
            *minted += 1;
        }
        state
            .held
            .entry(buyer.clone())
            .or_default()
            .push(event_id.to_string());
        state
            .membership
            .insert((buyer.clone(), event_id.to_string()));

        // (h) forward the full payment to the event owner. Last step: a
        // fault here unwinds everything above before the guard drops.
        if let Err(fault) = self.payments().transfer(&owner, payment) {
            state
                .membership
                .remove(&(buyer.clone(), event_id.to_string()));
            let emptied = match state.held.get_mut(buyer) {
                Some(list) => {
                    list.pop();
                    list.is_empty()
                }
                None => false,
            };
            if emptied {
                state.held.remove(buyer);
            }
            if let Some(minted) = state.minted.get_mut(event_id) {
                *minted -= 1;
            }
            state.tickets.remove(&ticket_id);
            state.next_ticket_id = ticket_id;
            if let Some(event) = state.events.get_mut(event_id) {
                event.remaining_tickets += 1;
            }

            warn!(
                event = event_id,
                buyer = %buyer,
                ticket = ticket_id,
                %fault,
                "payout failed, issuance rolled back"
            );
            return Err(Error::PayoutFailed {
                to: owner,
                amount: payment,
                reason: fault.to_string(),
            });
        }

        state.notifications.push(Notification::TicketIssued {
            ticket_id,
            event_id: event_id.to_string(),
            buyer: buyer.clone(),
        });
        state.notifications.push(Notification::PaymentReceived {
            payer: buyer.clone(),
            amount: payment,
        });

        debug!(event = event_id, buyer = %buyer, ticket = ticket_id, "ticket issued");
        Ok(ticket_id)
    }

    // =========================================================================
    // Ticket queries
    // =========================================================================

    /// Events `account` holds a ticket for, in purchase order.
    pub fn held_events(&self, account: &AccountId) -> Vec<EventId> {
        self.state()
            .read()
            .held
            .get(account)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `account` holds a ticket for `event_id`. O(1).
    pub fn has_ticket(&self, account: &AccountId, event_id: &str) -> bool {
        self.state()
            .read()
            .membership
            .contains(&(account.clone(), event_id.to_string()))
    }

    /// Owner of an issued ticket. Strict: fails on unknown ids.
    pub fn owner_of(&self, ticket_id: TicketId) -> Result<AccountId> {
        self.state()
            .read()
            .tickets
            .get(&ticket_id)
            .map(|ticket| ticket.owner.clone())
            .ok_or(Error::UnknownTicket { ticket_id })
    }

    /// The encoded metadata payload stored at mint time, verbatim.
    pub fn token_uri(&self, ticket_id: TicketId) -> Result<String> {
        self.state()
            .read()
            .tickets
            .get(&ticket_id)
            .map(|ticket| ticket.token_uri.clone())
            .ok_or(Error::UnknownTicket { ticket_id })
    }

    /// The full ticket record. Strict: fails on unknown ids.
    pub fn ticket(&self, ticket_id: TicketId) -> Result<TicketRecord> {
        self.state()
            .read()
            .tickets
            .get(&ticket_id)
            .cloned()
            .ok_or(Error::UnknownTicket { ticket_id })
    }
}
