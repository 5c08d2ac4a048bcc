//! Builders for the two-party scenario shared by the handler tests.
//!
//! Every call returns fresh values; tests never share mutable fixtures.

use ticketdesk_test_support::InMemoryRepository;

use crate::domain::entities::{Event, Guest, Ticket};

pub(crate) fn boat_party() -> Event {
    Event {
        id: 1,
        name: "Boat Party".to_owned(),
        organizer_name: "Vishav".to_owned(),
        start_date: "5 Oct 2020".to_owned(),
        end_date: "7 Oct 2020".to_owned(),
        place: "Chain Bridge".to_owned(),
        entry_fee: 500,
    }
}

pub(crate) fn morison_party() -> Event {
    Event {
        id: 2,
        name: "Morison Party".to_owned(),
        organizer_name: "Vishav".to_owned(),
        start_date: "5 Oct 2020".to_owned(),
        end_date: "7 Oct 2020".to_owned(),
        place: "Morisson 2".to_owned(),
        entry_fee: 500,
    }
}

pub(crate) fn guest(id: i64, name: &str, gender: &str) -> Guest {
    Guest {
        id,
        name: name.to_owned(),
        city: "Dhuri".to_owned(),
        contact: "264446658".to_owned(),
        email: format!("{}@gmail.com", name.to_lowercase()),
        gender: gender.to_owned(),
    }
}

pub(crate) fn piyush() -> Guest {
    guest(1, "Piyush", "Male")
}

pub(crate) fn vishav() -> Guest {
    guest(2, "Vishav", "Male")
}

pub(crate) fn ticket(id: i64, event_id: i64, guest_id: i64, price_paid: i64) -> Ticket {
    Ticket {
        id,
        ticket_type: "VIP".to_owned(),
        price_paid,
        discount: 0,
        expiry: "7 Oct 2020".to_owned(),
        order_info: "No discount".to_owned(),
        event_id,
        guest_id,
    }
}

/// Repositories for one test case.
pub(crate) struct Catalog {
    pub events: InMemoryRepository<Event>,
    pub guests: InMemoryRepository<Guest>,
    pub tickets: InMemoryRepository<Ticket>,
}

impl Catalog {
    pub(crate) fn new(events: Vec<Event>, guests: Vec<Guest>, tickets: Vec<Ticket>) -> Self {
        Self {
            events: InMemoryRepository::new(events),
            guests: InMemoryRepository::new(guests),
            tickets: InMemoryRepository::new(tickets),
        }
    }
}

/// Piyush holds one 500 ticket to Boat Party, Vishav one 500 ticket to
/// Morison Party. Events are stored Morison first.
pub(crate) fn two_parties() -> Catalog {
    Catalog::new(
        vec![morison_party(), boat_party()],
        vec![piyush(), vishav()],
        vec![ticket(1, 1, 1, 500), ticket(2, 2, 2, 500)],
    )
}
