//! Command handlers for the Events, Tickets & Guests context.
//!
//! Each handler validates its command, looks up the target, applies the
//! change and persists it through the repository. Handlers keep no state of
//! their own.
//!
//! Field updates (discount, place, guest name) fail with
//! `DomainError::NotFound` when the target is missing. Removals report a
//! missing target as `Ok(false)` and change nothing.

use ticketdesk_core::command::Command;
use ticketdesk_core::entity::{Entity, UNASSIGNED_ID};
use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;
use tracing::{info, instrument};

use crate::domain::commands::{
    AddEvent, AddGuest, ChangeEventPlace, ChangeGuestName, ChangeTicketDiscount, IssueTicket,
    RemoveEvent, RemoveGuest,
};
use crate::domain::entities::{Event, Guest, Ticket};
use crate::domain::validation::{
    parse_date, require_non_blank, require_non_negative, validate_date_range, validate_discount,
};

/// Persists a mutated entity that was just loaded. A `false` from the store
/// means the row vanished in between, which is reported as not found.
async fn persist_update<T: Entity>(repo: &dyn Repository<T>, entity: T) -> Result<T, DomainError> {
    let id = entity.id();
    if repo.update(entity.clone()).await? {
        Ok(entity)
    } else {
        Err(DomainError::not_found::<T>(id))
    }
}

/// Removes every ticket matching `belongs`, returning how many went.
async fn remove_tickets_where(
    tickets: &dyn Repository<Ticket>,
    belongs: impl Fn(&Ticket) -> bool,
) -> Result<usize, DomainError> {
    let mut removed = 0;
    for ticket in tickets.get_all().await? {
        if belongs(&ticket) && tickets.remove_entity(&ticket).await? {
            removed += 1;
        }
    }
    Ok(removed)
}

/// Handles the `AddEvent` command: validates the fields and inserts a new
/// event.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank name, a negative entry fee
/// or malformed/inverted dates, and propagates repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id()))]
pub async fn handle_add_event(
    command: &AddEvent,
    events: &dyn Repository<Event>,
) -> Result<Event, DomainError> {
    require_non_blank("name", &command.name)?;
    require_non_negative("entry_fee", command.entry_fee)?;
    validate_date_range(&command.start_date, &command.end_date)?;

    let event = events
        .insert(Event {
            id: UNASSIGNED_ID,
            name: command.name.clone(),
            organizer_name: command.organizer_name.clone(),
            start_date: command.start_date.clone(),
            end_date: command.end_date.clone(),
            place: command.place.clone(),
            entry_fee: command.entry_fee,
        })
        .await?;

    info!(event_id = event.id, "event added");
    Ok(event)
}

/// Handles the `ChangeEventPlace` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank place and
/// `DomainError::NotFound` if the event does not exist.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), event_id = command.event_id))]
pub async fn handle_change_event_place(
    command: &ChangeEventPlace,
    events: &dyn Repository<Event>,
) -> Result<Event, DomainError> {
    require_non_blank("place", &command.place)?;

    let mut event = events.get_one(command.event_id).await?;
    event.place.clone_from(&command.place);
    let event = persist_update(events, event).await?;

    info!(place = %event.place, "event place changed");
    Ok(event)
}

/// Handles the `RemoveEvent` command. When the event existed, its tickets
/// are removed too.
///
/// The two steps are not atomic: if removing the tickets fails, the event is
/// already gone. PostgreSQL removes them anyway through `ON DELETE CASCADE`.
///
/// # Errors
///
/// Propagates repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), event_id = command.event_id))]
pub async fn handle_remove_event(
    command: &RemoveEvent,
    events: &dyn Repository<Event>,
    tickets: &dyn Repository<Ticket>,
) -> Result<bool, DomainError> {
    let removed = events.remove(command.event_id).await?;
    if !removed {
        info!("event not found, nothing removed");
        return Ok(false);
    }

    let event_id = command.event_id;
    let cascaded = remove_tickets_where(tickets, |t| t.event_id == event_id).await?;
    info!(tickets_removed = cascaded, "event removed");
    Ok(true)
}

/// Handles the `AddGuest` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank name and propagates
/// repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id()))]
pub async fn handle_add_guest(
    command: &AddGuest,
    guests: &dyn Repository<Guest>,
) -> Result<Guest, DomainError> {
    require_non_blank("name", &command.name)?;

    let guest = guests
        .insert(Guest {
            id: UNASSIGNED_ID,
            name: command.name.clone(),
            city: command.city.clone(),
            contact: command.contact.clone(),
            email: command.email.clone(),
            gender: command.gender.clone(),
        })
        .await?;

    info!(guest_id = guest.id, "guest added");
    Ok(guest)
}

/// Handles the `ChangeGuestName` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank name and
/// `DomainError::NotFound` if the guest does not exist.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), guest_id = command.guest_id))]
pub async fn handle_change_guest_name(
    command: &ChangeGuestName,
    guests: &dyn Repository<Guest>,
) -> Result<Guest, DomainError> {
    require_non_blank("name", &command.name)?;

    let mut guest = guests.get_one(command.guest_id).await?;
    guest.name.clone_from(&command.name);
    let guest = persist_update(guests, guest).await?;

    info!("guest renamed");
    Ok(guest)
}

/// Handles the `RemoveGuest` command. When the guest existed, their tickets
/// are removed too.
///
/// Not atomic, as with [`handle_remove_event`].
///
/// # Errors
///
/// Propagates repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), guest_id = command.guest_id))]
pub async fn handle_remove_guest(
    command: &RemoveGuest,
    guests: &dyn Repository<Guest>,
    tickets: &dyn Repository<Ticket>,
) -> Result<bool, DomainError> {
    let removed = guests.remove(command.guest_id).await?;
    if !removed {
        info!("guest not found, nothing removed");
        return Ok(false);
    }

    let guest_id = command.guest_id;
    let cascaded = remove_tickets_where(tickets, |t| t.guest_id == guest_id).await?;
    info!(tickets_removed = cascaded, "guest removed");
    Ok(true)
}

/// Handles the `IssueTicket` command: checks the referenced event and guest
/// exist, validates the ticket fields and inserts the ticket.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a negative price, an out-of-range
/// discount or a malformed expiry, `DomainError::NotFound` if the event or
/// guest does not exist, and propagates repository errors.
#[instrument(
    skip_all,
    fields(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = command.event_id,
        guest_id = command.guest_id,
    )
)]
pub async fn handle_issue_ticket(
    command: &IssueTicket,
    tickets: &dyn Repository<Ticket>,
    events: &dyn Repository<Event>,
    guests: &dyn Repository<Guest>,
) -> Result<Ticket, DomainError> {
    require_non_negative("price_paid", command.price_paid)?;
    validate_discount(command.discount)?;
    parse_date("expiry", &command.expiry)?;

    events.get_one(command.event_id).await?;
    guests.get_one(command.guest_id).await?;

    let ticket = tickets
        .insert(Ticket {
            id: UNASSIGNED_ID,
            ticket_type: command.ticket_type.clone(),
            price_paid: command.price_paid,
            discount: command.discount,
            expiry: command.expiry.clone(),
            order_info: command.order_info.clone(),
            event_id: command.event_id,
            guest_id: command.guest_id,
        })
        .await?;

    info!(ticket_id = ticket.id, "ticket issued");
    Ok(ticket)
}

/// Handles the `ChangeTicketDiscount` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the discount is outside `0..=100`
/// and `DomainError::NotFound` if the ticket does not exist.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), ticket_id = command.ticket_id))]
pub async fn handle_change_ticket_discount(
    command: &ChangeTicketDiscount,
    tickets: &dyn Repository<Ticket>,
) -> Result<Ticket, DomainError> {
    validate_discount(command.discount)?;

    let mut ticket = tickets.get_one(command.ticket_id).await?;
    ticket.discount = command.discount;
    let ticket = persist_update(tickets, ticket).await?;

    info!(discount = ticket.discount, "ticket discount changed");
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use ticketdesk_core::error::DomainError;
    use ticketdesk_core::repository::Repository;
    use ticketdesk_test_support::FailingRepository;
    use uuid::Uuid;

    use super::*;
    use crate::application::query_handlers::get_one_ticket;
    use crate::fixtures::{Catalog, boat_party, morison_party, piyush, ticket, two_parties, vishav};

    fn add_event_command() -> AddEvent {
        AddEvent {
            correlation_id: Uuid::new_v4(),
            name: "DanceParty".to_owned(),
            organizer_name: "Sonika".to_owned(),
            start_date: "12-12-2020".to_owned(),
            end_date: "13-12-2020".to_owned(),
            place: "India".to_owned(),
            entry_fee: 1000,
        }
    }

    fn issue_ticket_command(event_id: i64, guest_id: i64) -> IssueTicket {
        IssueTicket {
            correlation_id: Uuid::new_v4(),
            event_id,
            guest_id,
            ticket_type: "Standard".to_owned(),
            price_paid: 250,
            discount: 10,
            expiry: "7 Oct 2020".to_owned(),
            order_info: "Online".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_add_event_inserts_event_with_assigned_id() {
        // Arrange
        let catalog = two_parties();

        // Act
        let event = handle_add_event(&add_event_command(), &catalog.events)
            .await
            .unwrap();

        // Assert
        assert_eq!(event.id, 3);
        assert_eq!(event.name, "DanceParty");
        assert_eq!(event.place, "India");
        assert_eq!(catalog.events.calls().insert, 1);
        assert_eq!(catalog.events.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_add_event_rejects_end_before_start() {
        // Arrange
        let catalog = two_parties();
        let mut command = add_event_command();
        command.start_date = "13-12-2020".to_owned();
        command.end_date = "12-12-2020".to_owned();

        // Act
        let result = handle_add_event(&command, &catalog.events).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(catalog.events.calls().insert, 0);
    }

    #[tokio::test]
    async fn test_add_event_rejects_negative_entry_fee() {
        let catalog = two_parties();
        let mut command = add_event_command();
        command.entry_fee = -1;

        let result = handle_add_event(&command, &catalog.events).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_change_event_place_updates_venue() {
        // Arrange
        let catalog = two_parties();
        let command = ChangeEventPlace {
            correlation_id: Uuid::new_v4(),
            event_id: 1,
            place: "Margaret Island".to_owned(),
        };

        // Act
        let event = handle_change_event_place(&command, &catalog.events)
            .await
            .unwrap();

        // Assert
        assert_eq!(event.place, "Margaret Island");
        assert_eq!(catalog.events.get_one(1).await.unwrap().place, "Margaret Island");
        assert_eq!(catalog.events.get_one(2).await.unwrap(), morison_party());
    }

    #[tokio::test]
    async fn test_change_event_place_returns_not_found_for_missing_event() {
        // Arrange
        let catalog = two_parties();
        let command = ChangeEventPlace {
            correlation_id: Uuid::new_v4(),
            event_id: 77,
            place: "Nowhere".to_owned(),
        };

        // Act
        let result = handle_change_event_place(&command, &catalog.events).await;

        // Assert
        match result.unwrap_err() {
            DomainError::NotFound { entity, id } => {
                assert_eq!(entity, "event");
                assert_eq!(id, 77);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(catalog.events.calls().update, 0);
    }

    #[tokio::test]
    async fn test_remove_event_cascades_to_its_tickets() {
        // Arrange
        let catalog = Catalog::new(
            vec![boat_party(), morison_party()],
            vec![piyush(), vishav()],
            vec![
                ticket(1, 1, 1, 500),
                ticket(2, 2, 2, 500),
                ticket(3, 1, 2, 300),
            ],
        );
        let command = RemoveEvent {
            correlation_id: Uuid::new_v4(),
            event_id: 1,
        };

        // Act
        let removed = handle_remove_event(&command, &catalog.events, &catalog.tickets)
            .await
            .unwrap();

        // Assert
        assert!(removed);
        assert_eq!(catalog.events.rows(), vec![morison_party()]);
        assert_eq!(catalog.tickets.rows(), vec![ticket(2, 2, 2, 500)]);
    }

    #[tokio::test]
    async fn test_remove_event_missing_id_is_a_no_op() {
        // Arrange
        let catalog = two_parties();
        let command = RemoveEvent {
            correlation_id: Uuid::new_v4(),
            event_id: 3,
        };

        // Act
        let removed = handle_remove_event(&command, &catalog.events, &catalog.tickets)
            .await
            .unwrap();

        // Assert
        assert!(!removed);
        assert_eq!(catalog.events.rows().len(), 2);
        assert_eq!(catalog.tickets.rows().len(), 2);
        assert_eq!(catalog.tickets.calls().remove, 0);
    }

    #[tokio::test]
    async fn test_remove_event_keeps_event_removal_when_ticket_cascade_fails() {
        // Arrange
        let catalog = two_parties();
        let tickets = FailingRepository::<Ticket>::new();
        let command = RemoveEvent {
            correlation_id: Uuid::new_v4(),
            event_id: 1,
        };

        // Act
        let result = handle_remove_event(&command, &catalog.events, &tickets).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert_eq!(catalog.events.rows(), vec![morison_party()]);
    }

    #[tokio::test]
    async fn test_add_guest_inserts_guest() {
        // Arrange
        let catalog = two_parties();
        let command = AddGuest {
            correlation_id: Uuid::new_v4(),
            name: "Tom".to_owned(),
            city: "Budapest".to_owned(),
            contact: "123".to_owned(),
            email: "tom@example.com".to_owned(),
            gender: "Male".to_owned(),
        };

        // Act
        let guest = handle_add_guest(&command, &catalog.guests).await.unwrap();

        // Assert
        assert_eq!(guest.id, 3);
        assert_eq!(catalog.guests.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_add_guest_rejects_blank_name() {
        let catalog = two_parties();
        let command = AddGuest {
            correlation_id: Uuid::new_v4(),
            name: " ".to_owned(),
            city: String::new(),
            contact: String::new(),
            email: String::new(),
            gender: String::new(),
        };

        let result = handle_add_guest(&command, &catalog.guests).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(catalog.guests.calls().insert, 0);
    }

    #[tokio::test]
    async fn test_change_guest_name_renames_guest() {
        // Arrange
        let catalog = two_parties();
        let command = ChangeGuestName {
            correlation_id: Uuid::new_v4(),
            guest_id: 1,
            name: "Vishav".to_owned(),
        };

        // Act
        let guest = handle_change_guest_name(&command, &catalog.guests)
            .await
            .unwrap();

        // Assert
        assert_eq!(guest.name, "Vishav");
        assert_eq!(catalog.guests.get_one(1).await.unwrap().name, "Vishav");
        assert_eq!(catalog.guests.calls().update, 1);
    }

    #[tokio::test]
    async fn test_change_guest_name_returns_not_found_for_missing_guest() {
        let catalog = two_parties();
        let command = ChangeGuestName {
            correlation_id: Uuid::new_v4(),
            guest_id: 9,
            name: "Nobody".to_owned(),
        };

        let result = handle_change_guest_name(&command, &catalog.guests).await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "guest", id: 9 })
        ));
    }

    #[tokio::test]
    async fn test_remove_guest_removes_only_that_guest_and_their_tickets() {
        // Arrange
        let catalog = two_parties();
        let command = RemoveGuest {
            correlation_id: Uuid::new_v4(),
            guest_id: 2,
        };

        // Act
        let removed = handle_remove_guest(&command, &catalog.guests, &catalog.tickets)
            .await
            .unwrap();

        // Assert
        assert!(removed);
        assert_eq!(catalog.guests.rows(), vec![piyush()]);
        assert_eq!(catalog.tickets.rows(), vec![ticket(1, 1, 1, 500)]);
    }

    #[tokio::test]
    async fn test_remove_guest_missing_id_returns_false() {
        let catalog = two_parties();
        let command = RemoveGuest {
            correlation_id: Uuid::new_v4(),
            guest_id: 3,
        };

        let removed = handle_remove_guest(&command, &catalog.guests, &catalog.tickets)
            .await
            .unwrap();

        assert!(!removed);
        assert_eq!(catalog.guests.rows().len(), 2);
        assert_eq!(catalog.guests.calls().remove, 1);
    }

    #[tokio::test]
    async fn test_issue_ticket_inserts_ticket_for_existing_event_and_guest() {
        // Arrange
        let catalog = two_parties();

        // Act
        let ticket = handle_issue_ticket(
            &issue_ticket_command(2, 1),
            &catalog.tickets,
            &catalog.events,
            &catalog.guests,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(ticket.id, 3);
        assert_eq!(ticket.event_id, 2);
        assert_eq!(ticket.guest_id, 1);
        assert_eq!(ticket.discount, 10);
        assert_eq!(catalog.tickets.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_issue_ticket_rejects_unknown_event() {
        // Arrange
        let catalog = two_parties();

        // Act
        let result = handle_issue_ticket(
            &issue_ticket_command(5, 1),
            &catalog.tickets,
            &catalog.events,
            &catalog.guests,
        )
        .await;

        // Assert
        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "event", id: 5 })
        ));
        assert_eq!(catalog.tickets.calls().insert, 0);
    }

    #[tokio::test]
    async fn test_issue_ticket_rejects_malformed_expiry() {
        // Arrange
        let catalog = two_parties();
        let mut command = issue_ticket_command(1, 1);
        command.expiry = "next summer".to_owned();

        // Act
        let result = handle_issue_ticket(
            &command,
            &catalog.tickets,
            &catalog.events,
            &catalog.guests,
        )
        .await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(catalog.tickets.calls().insert, 0);
    }

    #[tokio::test]
    async fn test_issue_ticket_rejects_unknown_guest() {
        let catalog = two_parties();

        let result = handle_issue_ticket(
            &issue_ticket_command(1, 8),
            &catalog.tickets,
            &catalog.events,
            &catalog.guests,
        )
        .await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "guest", id: 8 })
        ));
    }

    #[tokio::test]
    async fn test_change_ticket_discount_is_visible_on_next_read() {
        // Arrange
        let catalog = two_parties();
        let command = ChangeTicketDiscount {
            correlation_id: Uuid::new_v4(),
            ticket_id: 1,
            discount: 25,
        };

        // Act
        handle_change_ticket_discount(&command, &catalog.tickets)
            .await
            .unwrap();

        // Assert
        let ticket = get_one_ticket(1, &catalog.tickets).await.unwrap();
        assert_eq!(ticket.discount, 25);
        assert_eq!(ticket.price_paid, 500);
    }

    #[tokio::test]
    async fn test_change_ticket_discount_returns_not_found_for_missing_ticket() {
        let catalog = two_parties();
        let command = ChangeTicketDiscount {
            correlation_id: Uuid::new_v4(),
            ticket_id: 12,
            discount: 5,
        };

        let result = handle_change_ticket_discount(&command, &catalog.tickets).await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "ticket", id: 12 })
        ));
    }

    #[tokio::test]
    async fn test_change_ticket_discount_rejects_out_of_range_values() {
        // Arrange
        let catalog = two_parties();

        for discount in [-1, 101] {
            let command = ChangeTicketDiscount {
                correlation_id: Uuid::new_v4(),
                ticket_id: 1,
                discount,
            };

            // Act
            let result = handle_change_ticket_discount(&command, &catalog.tickets).await;

            // Assert
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
        assert_eq!(catalog.tickets.calls().get_one, 0);
        assert_eq!(catalog.tickets.get_one(1).await.unwrap().discount, 0);
    }

    #[tokio::test]
    async fn test_change_ticket_discount_propagates_repository_failure() {
        let tickets = FailingRepository::<Ticket>::new();
        let command = ChangeTicketDiscount {
            correlation_id: Uuid::new_v4(),
            ticket_id: 1,
            discount: 5,
        };

        let result = handle_change_ticket_discount(&command, &tickets).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
