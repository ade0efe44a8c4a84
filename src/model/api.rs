use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that confirm an action without returning a row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable confirmation message
    pub message: String,
}

/// The response for the health check endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Always "ok" when the server is able to respond
    pub status: String,
    /// Server time the health check was answered
    pub timestamp: DateTime<Utc>,
}
