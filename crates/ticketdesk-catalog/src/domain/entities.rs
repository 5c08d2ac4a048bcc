//! Entities for the Events, Tickets & Guests context.
//!
//! Ownership runs one way: a `Ticket` holds the ids of its event and guest.
//! Neither `Event` nor `Guest` keeps a ticket list; the reporting layer
//! builds those indexes on demand.

use serde::{Deserialize, Serialize};
use ticketdesk_core::entity::Entity;

/// A scheduled event tickets are sold for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: i64,
    /// Display name, e.g. "Boat Party".
    pub name: String,
    /// Name of the organizer.
    pub organizer_name: String,
    /// Start date, as entered (e.g. "5 Oct 2020").
    pub start_date: String,
    /// End date, as entered.
    pub end_date: String,
    /// Venue name.
    pub place: String,
    /// Entry fee in whole currency units.
    pub entry_fee: i64,
}

impl Entity for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A ticket held by one guest for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket identifier.
    pub id: i64,
    /// Type label, e.g. "VIP".
    pub ticket_type: String,
    /// Price actually paid, in whole currency units.
    pub price_paid: i64,
    /// Discount in percent, `0..=100`.
    pub discount: i32,
    /// Expiry date, as entered.
    pub expiry: String,
    /// Free-form order information.
    pub order_info: String,
    /// The event this ticket admits to.
    pub event_id: i64,
    /// The guest holding this ticket.
    pub guest_id: i64,
}

impl Entity for Ticket {
    const KIND: &'static str = "ticket";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A person holding tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Guest identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Phone number or other contact detail.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Gender as recorded. See [`crate::domain::gender::Gender::classify`].
    pub gender: String,
}

impl Entity for Guest {
    const KIND: &'static str = "guest";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}
