//! Read-only report routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use ticketdesk_catalog::application::query_handlers;
use ticketdesk_catalog::domain::reports::{GenderCountInEvent, TicketsByGuest, TotalEventSale};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /event-sales
#[instrument(skip(state))]
async fn event_sales(
    State(state): State<AppState>,
) -> Result<Json<Vec<TotalEventSale>>, ApiError> {
    let sales = query_handlers::get_event_sale(&*state.tickets, &*state.events).await?;
    Ok(Json(sales))
}

/// GET /tickets-by-guest
#[instrument(skip(state))]
async fn tickets_by_guest(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketsByGuest>>, ApiError> {
    let groups = query_handlers::tickets_by_single_guest(&*state.tickets, &*state.guests).await?;
    Ok(Json(groups))
}

/// GET /gender-counts
#[instrument(skip(state))]
async fn gender_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenderCountInEvent>>, ApiError> {
    let counts = query_handlers::get_no_of_males_females_list(
        &*state.tickets,
        &*state.events,
        &*state.guests,
    )
    .await?;
    Ok(Json(counts))
}

/// Returns the router for reports.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/event-sales", get(event_sales))
        .route("/tickets-by-guest", get(tickets_by_guest))
        .route("/gender-counts", get(gender_counts))
}
