//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the CRUD endpoints of every entity registered. Each
/// endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document. The router includes Swagger UI at `/api/docs` for
/// interactive API exploration, the OpenAPI JSON at `/api/docs/openapi.json`, the
/// service metadata endpoint at `/`, the liveness probe at `/health`, and a JSON 404
/// fallback for unmatched routes.
///
/// # Registered Endpoints
/// - `/api/blocos` - bloco CRUD
/// - `/api/salas` - sala CRUD plus equipamento attach/detach sub-routes
/// - `/api/equipamentos` - equipamento CRUD
/// - `/api/usuarios` - usuario CRUD
/// - `/api/reservas` - reserva CRUD, status transition, per-usuario and per-sala lists
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to have state attached
/// and middleware layered on top.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Room Reservation API",
            description = "REST API for managing blocos, salas, equipamentos, usuarios, and reservas"
        ),
        tags(
            (name = controller::bloco::BLOCO_TAG, description = "Bloco management routes"),
            (name = controller::sala::SALA_TAG, description = "Sala management routes"),
            (name = controller::equipamento::EQUIPAMENTO_TAG, description = "Equipamento management routes"),
            (name = controller::usuario::USUARIO_TAG, description = "Usuario management routes"),
            (name = controller::reserva::RESERVA_TAG, description = "Reserva management routes"),
            (name = controller::health::HEALTH_TAG, description = "Service health routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::bloco::get_blocos,
            controller::bloco::create_bloco
        ))
        .routes(routes!(
            controller::bloco::get_bloco,
            controller::bloco::update_bloco,
            controller::bloco::delete_bloco
        ))
        .routes(routes!(
            controller::sala::get_salas,
            controller::sala::create_sala
        ))
        .routes(routes!(
            controller::sala::get_sala,
            controller::sala::update_sala,
            controller::sala::delete_sala
        ))
        .routes(routes!(controller::sala::attach_equipamento))
        .routes(routes!(controller::sala::detach_equipamento))
        .routes(routes!(
            controller::equipamento::get_equipamentos,
            controller::equipamento::create_equipamento
        ))
        .routes(routes!(
            controller::equipamento::get_equipamento,
            controller::equipamento::update_equipamento,
            controller::equipamento::delete_equipamento
        ))
        .routes(routes!(
            controller::usuario::get_usuarios,
            controller::usuario::create_usuario
        ))
        .routes(routes!(
            controller::usuario::get_usuario,
            controller::usuario::update_usuario,
            controller::usuario::delete_usuario
        ))
        .routes(routes!(
            controller::reserva::get_reservas,
            controller::reserva::create_reserva
        ))
        .routes(routes!(
            controller::reserva::get_reserva,
            controller::reserva::update_reserva,
            controller::reserva::delete_reserva
        ))
        .routes(routes!(controller::reserva::update_reserva_status))
        .routes(routes!(controller::reserva::get_reservas_by_usuario))
        .routes(routes!(controller::reserva::get_reservas_by_sala))
        .routes(routes!(controller::health::get_health))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/", get(controller::root::root))
        .fallback(controller::root::not_found);

    routes
}
