use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reserva::{
            ReservaDetailDto, ReservaDto, ReservaPayload, ReservaStatusPayload,
            ReservaWithDetailsDto,
        },
    },
    server::{
        data::reserva::{ReservaDetails, ReservaRepository},
        error::Error,
        model::app::AppState,
        service::reserva::ReservaService,
    },
};

pub static RESERVA_TAG: &str = "reservas";

/// List all reservas with usuario, sala, and bloco names
#[utoipa::path(
    get,
    path = "/api/reservas",
    tag = RESERVA_TAG,
    responses(
        (status = 200, description = "Success when listing reservas", body = Vec<ReservaWithDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservas(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let reservas = reserva_repository.list().await?;

    let reserva_dtos: Vec<ReservaWithDetailsDto> =
        reservas.into_iter().map(to_details_dto).collect();

    Ok((StatusCode::OK, Json(reserva_dtos)))
}

/// Get a reserva by id, with usuario contact and sala capacity
#[utoipa::path(
    get,
    path = "/api/reservas/{reserva_id}",
    tag = RESERVA_TAG,
    params(
        ("reserva_id" = i32, Path, description = "Reserva ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the reserva", body = ReservaDetailDto),
        (status = 404, description = "Reserva not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reserva(
    State(state): State<AppState>,
    Path(reserva_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let Some((reserva, usuario, sala, bloco)) =
        reserva_repository.get_detail(reserva_id).await?
    else {
        return Err(Error::NotFound("Reserva"));
    };

    Ok((
        StatusCode::OK,
        Json(ReservaDetailDto {
            reserva_id: reserva.reserva_id,
            status: reserva.status,
            data_reserva: reserva.data_reserva,
            hora_inicio: reserva.hora_inicio,
            hora_fim: reserva.hora_fim,
            usuario_id: reserva.usuario_id,
            sala_id: reserva.sala_id,
            usuario_nome: usuario.as_ref().map(|usuario| usuario.nome.clone()),
            usuario_email: usuario.map(|usuario| usuario.email),
            sala_nome: sala.as_ref().map(|sala| sala.nome.clone()),
            sala_capacidade: sala.and_then(|sala| sala.capacidade),
            bloco_nome: bloco.map(|bloco| bloco.nome),
        }),
    ))
}

/// List the reservas made by a usuario
#[utoipa::path(
    get,
    path = "/api/reservas/usuario/{usuario_id}",
    tag = RESERVA_TAG,
    params(
        ("usuario_id" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Success when listing the usuario reservas", body = Vec<ReservaWithDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservas_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let reservas = reserva_repository.list_by_usuario(usuario_id).await?;

    let reserva_dtos: Vec<ReservaWithDetailsDto> =
        reservas.into_iter().map(to_details_dto).collect();

    Ok((StatusCode::OK, Json(reserva_dtos)))
}

/// List the reservas made for a sala
#[utoipa::path(
    get,
    path = "/api/reservas/sala/{sala_id}",
    tag = RESERVA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID")
    ),
    responses(
        (status = 200, description = "Success when listing the sala reservas", body = Vec<ReservaWithDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservas_by_sala(
    State(state): State<AppState>,
    Path(sala_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let reservas = reserva_repository.list_by_sala(sala_id).await?;

    let reserva_dtos: Vec<ReservaWithDetailsDto> =
        reservas.into_iter().map(to_details_dto).collect();

    Ok((StatusCode::OK, Json(reserva_dtos)))
}

/// Create a new reserva
///
/// The requested time slot must be free of other non-cancelada reservas for
/// the same sala and data_reserva.
#[utoipa::path(
    post,
    path = "/api/reservas",
    tag = RESERVA_TAG,
    request_body = ReservaPayload,
    responses(
        (status = 201, description = "Success when creating the reserva", body = ReservaDto),
        (status = 400, description = "A required field is missing or the interval is invalid", body = ErrorDto),
        (status = 409, description = "The time slot is already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reserva(
    State(state): State<AppState>,
    Json(payload): Json<ReservaPayload>,
) -> Result<impl IntoResponse, Error> {
    let reserva_service = ReservaService::new(&state.db);

    let (Some(status), Some(data_reserva), Some(hora_inicio), Some(usuario_id), Some(sala_id)) = (
        payload.status,
        payload.data_reserva,
        payload.hora_inicio,
        payload.usuario_id,
        payload.sala_id,
    ) else {
        return Err(Error::Validation(
            "status, data_reserva, hora_inicio, usuario_id, and sala_id are required",
        ));
    };

    let reserva = reserva_service
        .create(
            status,
            data_reserva,
            hora_inicio,
            payload.hora_fim,
            usuario_id,
            sala_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(reserva))))
}

/// Update a reserva
///
/// Moving the reserva to another sala, day, or time re-checks the slot the
/// same way creation does.
#[utoipa::path(
    put,
    path = "/api/reservas/{reserva_id}",
    tag = RESERVA_TAG,
    params(
        ("reserva_id" = i32, Path, description = "Reserva ID")
    ),
    request_body = ReservaPayload,
    responses(
        (status = 200, description = "Success when updating the reserva", body = ReservaDto),
        (status = 400, description = "A required field is missing or the interval is invalid", body = ErrorDto),
        (status = 404, description = "Reserva not found", body = ErrorDto),
        (status = 409, description = "The time slot is already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reserva(
    State(state): State<AppState>,
    Path(reserva_id): Path<i32>,
    Json(payload): Json<ReservaPayload>,
) -> Result<impl IntoResponse, Error> {
    let reserva_service = ReservaService::new(&state.db);

    let (Some(status), Some(data_reserva), Some(hora_inicio), Some(usuario_id), Some(sala_id)) = (
        payload.status,
        payload.data_reserva,
        payload.hora_inicio,
        payload.usuario_id,
        payload.sala_id,
    ) else {
        return Err(Error::Validation(
            "status, data_reserva, hora_inicio, usuario_id, and sala_id are required",
        ));
    };

    let Some(reserva) = reserva_service
        .update(
            reserva_id,
            status,
            data_reserva,
            hora_inicio,
            payload.hora_fim,
            usuario_id,
            sala_id,
        )
        .await?
    else {
        return Err(Error::NotFound("Reserva"));
    };

    Ok((StatusCode::OK, Json(to_dto(reserva))))
}

/// Update only the status of a reserva
#[utoipa::path(
    patch,
    path = "/api/reservas/{reserva_id}/status",
    tag = RESERVA_TAG,
    params(
        ("reserva_id" = i32, Path, description = "Reserva ID")
    ),
    request_body = ReservaStatusPayload,
    responses(
        (status = 200, description = "Success when updating the reserva status", body = ReservaDto),
        (status = 400, description = "Status is missing", body = ErrorDto),
        (status = 404, description = "Reserva not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reserva_status(
    State(state): State<AppState>,
    Path(reserva_id): Path<i32>,
    Json(payload): Json<ReservaStatusPayload>,
) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let status = payload
        .status
        .ok_or(Error::Validation("Status is required"))?;

    let Some(reserva) = reserva_repository.set_status(reserva_id, status).await? else {
        return Err(Error::NotFound("Reserva"));
    };

    Ok((StatusCode::OK, Json(to_dto(reserva))))
}

/// Delete a reserva
#[utoipa::path(
    delete,
    path = "/api/reservas/{reserva_id}",
    tag = RESERVA_TAG,
    params(
        ("reserva_id" = i32, Path, description = "Reserva ID")
    ),
    responses(
        (status = 200, description = "Success when deleting the reserva", body = MessageDto),
        (status = 404, description = "Reserva not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reserva(
    State(state): State<AppState>,
    Path(reserva_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reserva_repository = ReservaRepository::new(&state.db);

    let result = reserva_repository.delete(reserva_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Reserva"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reserva deleted successfully".to_string(),
        }),
    ))
}

fn to_dto(reserva: entity::reserva::Model) -> ReservaDto {
    ReservaDto {
        reserva_id: reserva.reserva_id,
        status: reserva.status,
        data_reserva: reserva.data_reserva,
        hora_inicio: reserva.hora_inicio,
        hora_fim: reserva.hora_fim,
        usuario_id: reserva.usuario_id,
        sala_id: reserva.sala_id,
    }
}

fn to_details_dto((reserva, usuario, sala, bloco): ReservaDetails) -> ReservaWithDetailsDto {
    ReservaWithDetailsDto {
        reserva_id: reserva.reserva_id,
        status: reserva.status,
        data_reserva: reserva.data_reserva,
        hora_inicio: reserva.hora_inicio,
        hora_fim: reserva.hora_fim,
        usuario_id: reserva.usuario_id,
        sala_id: reserva.sala_id,
        usuario_nome: usuario.map(|usuario| usuario.nome),
        sala_nome: sala.map(|sala| sala.nome),
        bloco_nome: bloco.map(|bloco| bloco.nome),
    }
}
