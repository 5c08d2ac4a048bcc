//! Routes for guests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use ticketdesk_catalog::application::{command_handlers, query_handlers};
use ticketdesk_catalog::domain::commands;
use ticketdesk_catalog::domain::entities::Guest;

use crate::error::ApiError;
use crate::routes::RemovedResponse;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct AddGuestRequest {
    /// Guest name.
    pub name: String,
    /// Home city.
    #[serde(default)]
    pub city: String,
    /// Phone or other contact.
    #[serde(default)]
    pub contact: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Free-text gender as the guest gave it.
    #[serde(default)]
    pub gender: String,
}

/// Request body for PUT /{id}/name.
#[derive(Debug, Deserialize)]
pub struct ChangeNameRequest {
    /// The new name.
    pub name: String,
}

/// GET /
#[instrument(skip(state))]
async fn list_guests(State(state): State<AppState>) -> Result<Json<Vec<Guest>>, ApiError> {
    let guests = query_handlers::get_all_guests(&*state.guests).await?;
    Ok(Json(guests))
}

/// POST /
#[instrument(skip(state, request))]
async fn add_guest(
    State(state): State<AppState>,
    Json(request): Json<AddGuestRequest>,
) -> Result<(StatusCode, Json<Guest>), ApiError> {
    let command = commands::AddGuest {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        city: request.city,
        contact: request.contact,
        email: request.email,
        gender: request.gender,
    };

    info!(correlation_id = %command.correlation_id, "handling add_guest command");

    let guest = command_handlers::handle_add_guest(&command, &*state.guests).await?;

    Ok((StatusCode::CREATED, Json(guest)))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn remove_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let command = commands::RemoveGuest {
        correlation_id: Uuid::new_v4(),
        guest_id,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_guest command");

    let removed =
        command_handlers::handle_remove_guest(&command, &*state.guests, &*state.tickets).await?;

    Ok(Json(RemovedResponse { removed }))
}

/// PUT /{id}/name
#[instrument(skip(state, request))]
async fn change_guest_name(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
    Json(request): Json<ChangeNameRequest>,
) -> Result<Json<Guest>, ApiError> {
    let command = commands::ChangeGuestName {
        correlation_id: Uuid::new_v4(),
        guest_id,
        name: request.name,
    };

    info!(correlation_id = %command.correlation_id, "handling change_guest_name command");

    let guest = command_handlers::handle_change_guest_name(&command, &*state.guests).await?;

    Ok(Json(guest))
}

/// Returns the router for guests.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_guests).post(add_guest))
        .route("/{id}", delete(remove_guest))
        .route("/{id}/name", put(change_guest_name))
}
