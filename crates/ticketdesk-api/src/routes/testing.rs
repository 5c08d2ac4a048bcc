//! Shared fixtures for the route unit tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use ticketdesk_accounts::domain::entities::AdminUser;
use ticketdesk_catalog::domain::entities::{Event, Guest, Ticket};
use ticketdesk_test_support::{FailingRepository, InMemoryRepository};
use tower::ServiceExt;

use crate::state::AppState;

pub(crate) struct Repos {
    pub(crate) events: Arc<InMemoryRepository<Event>>,
    pub(crate) tickets: Arc<InMemoryRepository<Ticket>>,
    pub(crate) guests: Arc<InMemoryRepository<Guest>>,
    pub(crate) admin_users: Arc<InMemoryRepository<AdminUser>>,
}

impl Repos {
    pub(crate) fn state(&self) -> AppState {
        AppState::new(
            self.events.clone(),
            self.tickets.clone(),
            self.guests.clone(),
            self.admin_users.clone(),
        )
    }
}

pub(crate) fn event(id: i64, name: &str, place: &str) -> Event {
    Event {
        id,
        name: name.to_owned(),
        organizer_name: "Vishav".to_owned(),
        start_date: "5 Oct 2020".to_owned(),
        end_date: "7 Oct 2020".to_owned(),
        place: place.to_owned(),
        entry_fee: 500,
    }
}

pub(crate) fn guest(id: i64, name: &str) -> Guest {
    Guest {
        id,
        name: name.to_owned(),
        city: "Dhuri".to_owned(),
        contact: "264446658".to_owned(),
        email: format!("{}@gmail.com", name.to_lowercase()),
        gender: "Male".to_owned(),
    }
}

pub(crate) fn ticket(id: i64, event_id: i64, guest_id: i64) -> Ticket {
    Ticket {
        id,
        ticket_type: "VIP".to_owned(),
        price_paid: 500,
        discount: 0,
        expiry: "7 Oct 2020".to_owned(),
        order_info: "No discount".to_owned(),
        event_id,
        guest_id,
    }
}

/// Boat Party and Morison Party, one ticket each for Piyush and Vishav.
pub(crate) fn two_parties() -> Repos {
    Repos {
        events: Arc::new(InMemoryRepository::new(vec![
            event(1, "Boat Party", "Chain Bridge"),
            event(2, "Morison Party", "Morisson 2"),
        ])),
        tickets: Arc::new(InMemoryRepository::new(vec![
            ticket(1, 1, 1),
            ticket(2, 2, 2),
        ])),
        guests: Arc::new(InMemoryRepository::new(vec![
            guest(1, "Piyush"),
            guest(2, "Vishav"),
        ])),
        admin_users: Arc::new(InMemoryRepository::default()),
    }
}

pub(crate) fn empty_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryRepository::<Event>::default()),
        Arc::new(InMemoryRepository::<Ticket>::default()),
        Arc::new(InMemoryRepository::<Guest>::default()),
        Arc::new(InMemoryRepository::<AdminUser>::default()),
    )
}

pub(crate) fn failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingRepository::<Event>::new()),
        Arc::new(FailingRepository::<Ticket>::new()),
        Arc::new(FailingRepository::<Guest>::new()),
        Arc::new(FailingRepository::<AdminUser>::new()),
    )
}

/// Sends one request and returns the status and JSON body (`Null` when the
/// body is not JSON).
pub(crate) async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}
