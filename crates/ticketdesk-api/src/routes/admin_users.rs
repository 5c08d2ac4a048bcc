//! Routes for administrator accounts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use ticketdesk_accounts::application::{command_handlers, query_handlers};
use ticketdesk_accounts::domain::commands;
use ticketdesk_accounts::domain::entities::AdminUser;

use crate::error::ApiError;
use crate::routes::RemovedResponse;
use crate::state::AppState;

/// Request body for POST / and POST /verify.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    /// Login name.
    pub username: String,
    /// Clear-text password.
    pub password: String,
}

/// Response body for POST /verify.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Whether the pair matched a stored account.
    pub verified: bool,
}

/// GET /
#[instrument(skip(state))]
async fn list_admin_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminUser>>, ApiError> {
    let admin_users = query_handlers::get_all_admin_users(&*state.admin_users).await?;
    Ok(Json(admin_users))
}

/// POST /
#[instrument(skip(state, request), fields(username = %request.username))]
async fn register_admin_user(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AdminUser>), ApiError> {
    let command = commands::RegisterAdminUser {
        correlation_id: Uuid::new_v4(),
        username: request.username,
        password: request.password,
    };

    info!(correlation_id = %command.correlation_id, "handling register_admin_user command");

    let admin_user =
        command_handlers::handle_register_admin_user(&command, &*state.admin_users).await?;

    Ok((StatusCode::CREATED, Json(admin_user)))
}

/// POST /verify
#[instrument(skip(state, request), fields(username = %request.username))]
async fn verify_credentials(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let verified = query_handlers::verify_admin_credentials(
        &request.username,
        &request.password,
        &*state.admin_users,
    )
    .await?;
    Ok(Json(VerifyResponse { verified }))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn remove_admin_user(
    State(state): State<AppState>,
    Path(admin_user_id): Path<i64>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let command = commands::RemoveAdminUser {
        correlation_id: Uuid::new_v4(),
        admin_user_id,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_admin_user command");

    let removed =
        command_handlers::handle_remove_admin_user(&command, &*state.admin_users).await?;

    Ok(Json(RemovedResponse { removed }))
}

/// Returns the router for administrator accounts.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admin_users).post(register_admin_user))
        .route("/verify", post(verify_credentials))
        .route("/{id}", delete(remove_admin_user))
}
