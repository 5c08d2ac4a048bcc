//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ticketdesk_accounts::domain::entities::AdminUser;
use ticketdesk_catalog::domain::entities::{Event, Guest, Ticket};
use ticketdesk_test_support::InMemoryRepository;
use tower::ServiceExt;

use ticketdesk_api::state::AppState;

/// Application state over empty in-memory repositories.
pub fn in_memory_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryRepository::<Event>::default()),
        Arc::new(InMemoryRepository::<Ticket>::default()),
        Arc::new(InMemoryRepository::<Guest>::default()),
        Arc::new(InMemoryRepository::<AdminUser>::default()),
    )
}

/// Build the full app router over `state`, with the same routes as `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    ticketdesk_api::app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("POST", uri, body)).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("PUT", uri, body)).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, empty_request("GET", uri)).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, empty_request("DELETE", uri)).await
}
