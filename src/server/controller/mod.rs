//! HTTP controller endpoints for the reserva web API.
//!
//! This module contains the Axum handlers behind every route. Controllers handle
//! HTTP requests, validate request payloads, interact with repositories and
//! services, and map rows into response DTOs. They use utoipa for OpenAPI
//! documentation.

pub mod bloco;
pub mod equipamento;
pub mod health;
pub mod reserva;
pub mod root;
pub mod sala;
pub mod usuario;
