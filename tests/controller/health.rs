//! Tests for the health check endpoint.
//!
//! This module verifies that the health endpoint reports the service as alive
//! without touching the database.

use axum::{http::StatusCode, response::IntoResponse};
use ::reserva::server::controller::health::get_health;

/// Tests the health check response.
///
/// Verifies that the health endpoint returns a 200 OK response. The endpoint
/// takes no state, so it works before any database is connected.
///
/// Expected: 200 OK response
#[tokio::test]
async fn returns_ok() {
    let resp = get_health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
}
