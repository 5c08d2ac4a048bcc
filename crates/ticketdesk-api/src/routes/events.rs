//! Routes for events.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use ticketdesk_catalog::application::{command_handlers, query_handlers};
use ticketdesk_catalog::domain::commands;
use ticketdesk_catalog::domain::entities::Event;

use crate::error::ApiError;
use crate::routes::RemovedResponse;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    /// Event name.
    pub name: String,
    /// Organizer name.
    pub organizer_name: String,
    /// First day, e.g. `12-12-2020`.
    pub start_date: String,
    /// Last day.
    pub end_date: String,
    /// Venue.
    pub place: String,
    /// Entry fee in whole currency units.
    pub entry_fee: i64,
}

/// Request body for PUT /{id}/place.
#[derive(Debug, Deserialize)]
pub struct ChangePlaceRequest {
    /// The new venue.
    pub place: String,
}

/// GET /
#[instrument(skip(state))]
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = query_handlers::get_all_events(&*state.events).await?;
    Ok(Json(events))
}

/// POST /
#[instrument(skip(state, request), fields(name = %request.name))]
async fn add_event(
    State(state): State<AppState>,
    Json(request): Json<AddEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let command = commands::AddEvent {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        organizer_name: request.organizer_name,
        start_date: request.start_date,
        end_date: request.end_date,
        place: request.place,
        entry_fee: request.entry_fee,
    };

    info!(correlation_id = %command.correlation_id, "handling add_event command");

    let event = command_handlers::handle_add_event(&command, &*state.events).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn remove_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let command = commands::RemoveEvent {
        correlation_id: Uuid::new_v4(),
        event_id,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_event command");

    let removed =
        command_handlers::handle_remove_event(&command, &*state.events, &*state.tickets).await?;

    Ok(Json(RemovedResponse { removed }))
}

/// PUT /{id}/place
#[instrument(skip(state, request))]
async fn change_event_place(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(request): Json<ChangePlaceRequest>,
) -> Result<Json<Event>, ApiError> {
    let command = commands::ChangeEventPlace {
        correlation_id: Uuid::new_v4(),
        event_id,
        place: request.place,
    };

    info!(correlation_id = %command.correlation_id, "handling change_event_place command");

    let event = command_handlers::handle_change_event_place(&command, &*state.events).await?;

    Ok(Json(event))
}

/// Returns the router for events.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(add_event))
        .route("/{id}", delete(remove_event))
        .route("/{id}/place", put(change_event_place))
}
