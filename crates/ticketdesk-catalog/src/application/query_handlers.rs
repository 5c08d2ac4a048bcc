//! Query handlers for the Events, Tickets & Guests context.
//!
//! Reports are computed from the repositories' current contents on every
//! call. Grouping is a single pass over the tickets with an index from group
//! key to accumulator, so groups come out in the order their first ticket
//! appears in the ticket repository.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;
use tracing::{instrument, warn};

use crate::domain::entities::{Event, Guest, Ticket};
use crate::domain::gender::Gender;
use crate::domain::reports::{GenderCountInEvent, TicketsByGuest, TotalEventSale};

/// Returns the position of `key`'s group in `groups`, creating it with
/// `init` on first sight.
fn group_slot<K, V>(
    index: &mut HashMap<K, usize>,
    groups: &mut Vec<V>,
    key: K,
    init: impl FnOnce() -> V,
) -> usize
where
    K: Eq + Hash,
{
    *index.entry(key).or_insert_with(|| {
        groups.push(init());
        groups.len() - 1
    })
}

/// Sums the price paid per event.
///
/// One entry per event that has at least one ticket; events without tickets
/// never appear. Tickets referencing an event that no longer exists are
/// skipped.
///
/// # Errors
///
/// Propagates repository errors unchanged. Returns
/// `DomainError::Validation` if an event's summed prices overflow `i64`.
#[instrument(skip_all)]
pub async fn get_event_sale(
    tickets: &dyn Repository<Ticket>,
    events: &dyn Repository<Event>,
) -> Result<Vec<TotalEventSale>, DomainError> {
    let tickets = tickets.get_all().await?;
    let events = events.get_all().await?;
    let event_names: HashMap<i64, &str> =
        events.iter().map(|e| (e.id, e.name.as_str())).collect();

    let mut index = HashMap::new();
    let mut sales: Vec<TotalEventSale> = Vec::new();
    for ticket in &tickets {
        let Some(&event_name) = event_names.get(&ticket.event_id) else {
            warn!(
                ticket_id = ticket.id,
                event_id = ticket.event_id,
                "skipping ticket for unknown event"
            );
            continue;
        };
        let slot = group_slot(&mut index, &mut sales, ticket.event_id, || TotalEventSale {
            event_name: event_name.to_owned(),
            ticket_price: 0,
        });
        let sale = &mut sales[slot];
        sale.ticket_price = sale
            .ticket_price
            .checked_add(ticket.price_paid)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "sales total for event {} exceeds the representable range",
                    ticket.event_id
                ))
            })?;
    }
    Ok(sales)
}

/// Lists each guest's tickets.
///
/// One entry per guest holding at least one ticket; ticket lists keep
/// repository order. Tickets referencing a guest that no longer exists are
/// skipped.
///
/// # Errors
///
/// Propagates repository errors unchanged.
#[instrument(skip_all)]
pub async fn tickets_by_single_guest(
    tickets: &dyn Repository<Ticket>,
    guests: &dyn Repository<Guest>,
) -> Result<Vec<TicketsByGuest>, DomainError> {
    let tickets = tickets.get_all().await?;
    let guests = guests.get_all().await?;
    let guest_names: HashMap<i64, &str> =
        guests.iter().map(|g| (g.id, g.name.as_str())).collect();

    let mut index = HashMap::new();
    let mut groups: Vec<TicketsByGuest> = Vec::new();
    for ticket in tickets {
        let Some(&guest_name) = guest_names.get(&ticket.guest_id) else {
            warn!(
                ticket_id = ticket.id,
                guest_id = ticket.guest_id,
                "skipping ticket for unknown guest"
            );
            continue;
        };
        let slot = group_slot(&mut index, &mut groups, ticket.guest_id, || TicketsByGuest {
            guest_name: guest_name.to_owned(),
            tickets: Vec::new(),
        });
        groups[slot].tickets.push(ticket);
    }
    Ok(groups)
}

/// Counts the distinct male and female ticket holders of every event.
///
/// A guest holding several tickets to the same event is counted once. Guests
/// whose gender classifies as [`Gender::Unspecified`] count in neither
/// bucket, so `no_of_males + no_of_females` never exceeds the number of
/// distinct holders. Events without tickets are excluded.
///
/// # Errors
///
/// Propagates repository errors unchanged.
#[instrument(skip_all)]
pub async fn get_no_of_males_females_list(
    tickets: &dyn Repository<Ticket>,
    events: &dyn Repository<Event>,
    guests: &dyn Repository<Guest>,
) -> Result<Vec<GenderCountInEvent>, DomainError> {
    let tickets = tickets.get_all().await?;
    let events = events.get_all().await?;
    let guests = guests.get_all().await?;
    let event_names: HashMap<i64, &str> =
        events.iter().map(|e| (e.id, e.name.as_str())).collect();
    let genders: HashMap<i64, Gender> = guests
        .iter()
        .map(|g| (g.id, Gender::classify(&g.gender)))
        .collect();

    let mut index = HashMap::new();
    let mut counts: Vec<GenderCountInEvent> = Vec::new();
    let mut seen_holders: HashSet<(i64, i64)> = HashSet::new();
    for ticket in &tickets {
        let (Some(&event_name), Some(&gender)) = (
            event_names.get(&ticket.event_id),
            genders.get(&ticket.guest_id),
        ) else {
            warn!(
                ticket_id = ticket.id,
                event_id = ticket.event_id,
                guest_id = ticket.guest_id,
                "skipping ticket with dangling reference"
            );
            continue;
        };
        let slot = group_slot(&mut index, &mut counts, ticket.event_id, || {
            GenderCountInEvent {
                event_name: event_name.to_owned(),
                no_of_males: 0,
                no_of_females: 0,
            }
        });
        if !seen_holders.insert((ticket.event_id, ticket.guest_id)) {
            continue;
        }
        match gender {
            Gender::Male => counts[slot].no_of_males += 1,
            Gender::Female => counts[slot].no_of_females += 1,
            Gender::Unspecified => {}
        }
    }
    Ok(counts)
}

/// Returns every ticket.
///
/// # Errors
///
/// Propagates repository errors unchanged.
pub async fn get_all_tickets(tickets: &dyn Repository<Ticket>) -> Result<Vec<Ticket>, DomainError> {
    tickets.get_all().await
}

/// Returns one ticket.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no ticket has `ticket_id`.
pub async fn get_one_ticket(
    ticket_id: i64,
    tickets: &dyn Repository<Ticket>,
) -> Result<Ticket, DomainError> {
    tickets.get_one(ticket_id).await
}

/// Returns every event.
///
/// # Errors
///
/// Propagates repository errors unchanged.
pub async fn get_all_events(events: &dyn Repository<Event>) -> Result<Vec<Event>, DomainError> {
    events.get_all().await
}

/// Returns every guest.
///
/// # Errors
///
/// Propagates repository errors unchanged.
pub async fn get_all_guests(guests: &dyn Repository<Guest>) -> Result<Vec<Guest>, DomainError> {
    guests.get_all().await
}
