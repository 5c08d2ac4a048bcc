//! Commands for the Events, Tickets & Guests context.

use ticketdesk_core::command::Command;
use uuid::Uuid;

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct AddEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event name.
    pub name: String,
    /// The organizer's name.
    pub organizer_name: String,
    /// Start date.
    pub start_date: String,
    /// End date.
    pub end_date: String,
    /// Venue name.
    pub place: String,
    /// Entry fee in whole currency units.
    pub entry_fee: i64,
}

impl Command for AddEvent {
    fn command_type(&self) -> &'static str {
        "catalog.add_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move an event to a different venue.
#[derive(Debug, Clone)]
pub struct ChangeEventPlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event identifier.
    pub event_id: i64,
    /// The new venue name.
    pub place: String,
}

impl Command for ChangeEventPlace {
    fn command_type(&self) -> &'static str {
        "catalog.change_event_place"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove an event and its tickets.
#[derive(Debug, Clone)]
pub struct RemoveEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event identifier.
    pub event_id: i64,
}

impl Command for RemoveEvent {
    fn command_type(&self) -> &'static str {
        "catalog.remove_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to register a guest.
#[derive(Debug, Clone)]
pub struct AddGuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The guest's name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Contact detail.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Gender as recorded.
    pub gender: String,
}

impl Command for AddGuest {
    fn command_type(&self) -> &'static str {
        "catalog.add_guest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to rename a guest.
#[derive(Debug, Clone)]
pub struct ChangeGuestName {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The guest identifier.
    pub guest_id: i64,
    /// The new name.
    pub name: String,
}

impl Command for ChangeGuestName {
    fn command_type(&self) -> &'static str {
        "catalog.change_guest_name"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a guest and their tickets.
#[derive(Debug, Clone)]
pub struct RemoveGuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The guest identifier.
    pub guest_id: i64,
}

impl Command for RemoveGuest {
    fn command_type(&self) -> &'static str {
        "catalog.remove_guest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to sell a ticket for an event to a guest.
#[derive(Debug, Clone)]
pub struct IssueTicket {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event the ticket admits to.
    pub event_id: i64,
    /// The guest receiving the ticket.
    pub guest_id: i64,
    /// Type label.
    pub ticket_type: String,
    /// Price paid.
    pub price_paid: i64,
    /// Discount in percent.
    pub discount: i32,
    /// Expiry date.
    pub expiry: String,
    /// Free-form order information.
    pub order_info: String,
}

impl Command for IssueTicket {
    fn command_type(&self) -> &'static str {
        "catalog.issue_ticket"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to change the discount on a ticket.
#[derive(Debug, Clone)]
pub struct ChangeTicketDiscount {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The ticket identifier.
    pub ticket_id: i64,
    /// The new discount in percent.
    pub discount: i32,
}

impl Command for ChangeTicketDiscount {
    fn command_type(&self) -> &'static str {
        "catalog.change_ticket_discount"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
