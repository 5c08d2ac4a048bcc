//! Report types computed on demand from the entity collections.

use serde::Serialize;

use super::entities::Ticket;

/// Total price paid across all tickets of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalEventSale {
    /// The event's name.
    pub event_name: String,
    /// Sum of `price_paid` over the event's tickets.
    pub ticket_price: i64,
}

/// All tickets held by one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketsByGuest {
    /// The guest's name.
    pub guest_name: String,
    /// The guest's tickets, in repository order.
    pub tickets: Vec<Ticket>,
}

/// Number of male and female ticket holders of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderCountInEvent {
    /// The event's name.
    pub event_name: String,
    /// Distinct ticket holders classified as male.
    pub no_of_males: u32,
    /// Distinct ticket holders classified as female.
    pub no_of_females: u32,
}
