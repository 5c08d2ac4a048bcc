//! Ticketdesk HTTP API: routes, shared state and error mapping.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full application router over `state`.
///
/// Middleware layers are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/events", routes::events::router())
        .nest("/api/v1/guests", routes::guests::router())
        .nest("/api/v1/tickets", routes::tickets::router())
        .nest("/api/v1/reports", routes::reports::router())
        .nest("/api/v1/admin-users", routes::admin_users::router())
        .with_state(state)
}
