//! Error types for the reserva server application.
//!
//! This module provides the unified error type returned by controllers and services.
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Main error type for the reserva server application.
///
/// Aggregates domain failures and external library errors into a single type so
/// handlers can return `Result<impl IntoResponse, Error>` and rely on the
/// `IntoResponse` implementation for the HTTP mapping.
///
/// # Error Categories
/// - Validation errors (missing or empty request fields)
/// - Not found errors (row lookups by id)
/// - Conflict errors (overlapping reservas, duplicate email, duplicate attach)
/// - External library errors (database, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Request body failed validation. The message is returned to the client verbatim.
    #[error("{0}")]
    Validation(&'static str),
    /// Row lookup by id matched nothing. Holds the entity name used in the message.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A non-cancelled reserva already occupies the requested time slot.
    #[error("Time slot already reserved")]
    TimeSlotTaken,
    /// The email address is already registered to another usuario.
    #[error("Email already exists")]
    EmailTaken,
    /// The equipamento is already attached to the sala.
    #[error("Equipamento already added to sala")]
    EquipamentoAttached,
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
}

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at debug level and return their message in the body.
/// Library errors are treated as internal server errors (500) with error logging.
///
/// # Returns
/// - 400 Bad Request - For request validation failures
/// - 404 Not Found - For missing rows
/// - 409 Conflict - For reserva overlap, duplicate email, duplicate attach
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::TimeSlotTaken | Self::EmailTaken | Self::EquipamentoAttached => {
                StatusCode::CONFLICT
            }
            Self::DbErr(_) | Self::HashError(_) => return InternalServerError(self).into_response(),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
