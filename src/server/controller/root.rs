use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::model::api::ErrorDto;

/// Service metadata and endpoint map
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Room Reservation API",
        "version": env!("CARGO_PKG_VERSION"),
        "documentation": "/api/docs",
        "endpoints": {
            "blocos": "/api/blocos",
            "salas": "/api/salas",
            "equipamentos": "/api/equipamentos",
            "usuarios": "/api/usuarios",
            "reservas": "/api/reservas",
            "health": "/health",
        },
    }))
}

/// Fallback for requests matching no route
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}
