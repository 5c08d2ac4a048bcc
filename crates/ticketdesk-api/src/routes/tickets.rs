//! Routes for tickets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use ticketdesk_catalog::application::{command_handlers, query_handlers};
use ticketdesk_catalog::domain::commands;
use ticketdesk_catalog::domain::entities::Ticket;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct IssueTicketRequest {
    /// The event the ticket admits to.
    pub event_id: i64,
    /// The holder.
    pub guest_id: i64,
    /// Type label, e.g. `VIP`.
    pub ticket_type: String,
    /// Price paid in whole currency units.
    pub price_paid: i64,
    /// Discount percent.
    #[serde(default)]
    pub discount: i32,
    /// Expiry date.
    pub expiry: String,
    /// Free-text order notes.
    #[serde(default)]
    pub order_info: String,
}

/// Request body for PUT /{id}/discount.
#[derive(Debug, Deserialize)]
pub struct ChangeDiscountRequest {
    /// The new discount percent.
    pub discount: i32,
}

/// GET /
#[instrument(skip(state))]
async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = query_handlers::get_all_tickets(&*state.tickets).await?;
    Ok(Json(tickets))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Ticket>, ApiError> {
    let ticket = query_handlers::get_one_ticket(ticket_id, &*state.tickets).await?;
    Ok(Json(ticket))
}

/// POST /
#[instrument(
    skip(state, request),
    fields(event_id = request.event_id, guest_id = request.guest_id)
)]
async fn issue_ticket(
    State(state): State<AppState>,
    Json(request): Json<IssueTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    let command = commands::IssueTicket {
        correlation_id: Uuid::new_v4(),
        event_id: request.event_id,
        guest_id: request.guest_id,
        ticket_type: request.ticket_type,
        price_paid: request.price_paid,
        discount: request.discount,
        expiry: request.expiry,
        order_info: request.order_info,
    };

    info!(correlation_id = %command.correlation_id, "handling issue_ticket command");

    let ticket = command_handlers::handle_issue_ticket(
        &command,
        &*state.tickets,
        &*state.events,
        &*state.guests,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// PUT /{id}/discount
#[instrument(skip(state, request))]
async fn change_ticket_discount(
    State(state): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(request): Json<ChangeDiscountRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let command = commands::ChangeTicketDiscount {
        correlation_id: Uuid::new_v4(),
        ticket_id,
        discount: request.discount,
    };

    info!(correlation_id = %command.correlation_id, "handling change_ticket_discount command");

    let ticket =
        command_handlers::handle_change_ticket_discount(&command, &*state.tickets).await?;

    Ok(Json(ticket))
}

/// Returns the router for tickets.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(issue_ticket))
        .route("/{id}", get(get_ticket))
        .route("/{id}/discount", put(change_ticket_discount))
}
