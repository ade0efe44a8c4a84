use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::SqlErr;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        equipamento::EquipamentoDto,
        sala::{AttachEquipamentoPayload, SalaDetailDto, SalaDto, SalaPayload, SalaWithBlocoDto},
    },
    server::{data::sala::SalaRepository, error::Error, model::app::AppState},
};

pub static SALA_TAG: &str = "salas";

/// List all salas with the nome of their bloco
#[utoipa::path(
    get,
    path = "/api/salas",
    tag = SALA_TAG,
    responses(
        (status = 200, description = "Success when listing salas", body = Vec<SalaWithBlocoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salas(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let salas = sala_repository.list().await?;

    let sala_dtos: Vec<SalaWithBlocoDto> = salas
        .into_iter()
        .map(|(sala, bloco)| SalaWithBlocoDto {
            sala_id: sala.sala_id,
            nome: sala.nome,
            descricao: sala.descricao,
            capacidade: sala.capacidade,
            bloco_id: sala.bloco_id,
            bloco_nome: bloco.map(|bloco| bloco.nome),
        })
        .collect();

    Ok((StatusCode::OK, Json(sala_dtos)))
}

/// Get a sala by id, including its attached equipamentos
#[utoipa::path(
    get,
    path = "/api/salas/{sala_id}",
    tag = SALA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the sala", body = SalaDetailDto),
        (status = 404, description = "Sala not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sala(
    State(state): State<AppState>,
    Path(sala_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let Some((sala, bloco)) = sala_repository.get_with_bloco(sala_id).await? else {
        return Err(Error::NotFound("Sala"));
    };

    let equipamentos = sala_repository.equipamentos(sala_id).await?;
    let equipamento_dtos: Vec<EquipamentoDto> = equipamentos
        .into_iter()
        .map(|equipamento| EquipamentoDto {
            equipamento_id: equipamento.equipamento_id,
            nome: equipamento.nome,
            descricao: equipamento.descricao,
            quantidade: equipamento.quantidade,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(SalaDetailDto {
            sala_id: sala.sala_id,
            nome: sala.nome,
            descricao: sala.descricao,
            capacidade: sala.capacidade,
            bloco_id: sala.bloco_id,
            bloco_nome: bloco.map(|bloco| bloco.nome),
            equipamentos: equipamento_dtos,
        }),
    ))
}

/// Create a new sala
#[utoipa::path(
    post,
    path = "/api/salas",
    tag = SALA_TAG,
    request_body = SalaPayload,
    responses(
        (status = 201, description = "Success when creating the sala", body = SalaDto),
        (status = 400, description = "Nome is missing or empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sala(
    State(state): State<AppState>,
    Json(payload): Json<SalaPayload>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let nome = payload
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(Error::Validation("Nome is required"))?;

    let sala = sala_repository
        .create(nome, payload.descricao, payload.capacidade, payload.bloco_id)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(sala))))
}

/// Update a sala
#[utoipa::path(
    put,
    path = "/api/salas/{sala_id}",
    tag = SALA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID")
    ),
    request_body = SalaPayload,
    responses(
        (status = 200, description = "Success when updating the sala", body = SalaDto),
        (status = 400, description = "Nome is missing or empty", body = ErrorDto),
        (status = 404, description = "Sala not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sala(
    State(state): State<AppState>,
    Path(sala_id): Path<i32>,
    Json(payload): Json<SalaPayload>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let nome = payload
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(Error::Validation("Nome is required"))?;

    let Some(sala) = sala_repository
        .update(
            sala_id,
            nome,
            payload.descricao,
            payload.capacidade,
            payload.bloco_id,
        )
        .await?
    else {
        return Err(Error::NotFound("Sala"));
    };

    Ok((StatusCode::OK, Json(to_dto(sala))))
}

/// Delete a sala
#[utoipa::path(
    delete,
    path = "/api/salas/{sala_id}",
    tag = SALA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID")
    ),
    responses(
        (status = 200, description = "Success when deleting the sala", body = MessageDto),
        (status = 404, description = "Sala not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sala(
    State(state): State<AppState>,
    Path(sala_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let result = sala_repository.delete(sala_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Sala"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Sala deleted successfully".to_string(),
        }),
    ))
}

/// Attach an equipamento to a sala
#[utoipa::path(
    post,
    path = "/api/salas/{sala_id}/equipamentos",
    tag = SALA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID")
    ),
    request_body = AttachEquipamentoPayload,
    responses(
        (status = 201, description = "Success when attaching the equipamento", body = MessageDto),
        (status = 400, description = "Equipamento id is missing", body = ErrorDto),
        (status = 409, description = "Equipamento already attached to the sala", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_equipamento(
    State(state): State<AppState>,
    Path(sala_id): Path<i32>,
    Json(payload): Json<AttachEquipamentoPayload>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let equipamento_id = payload
        .equipamento_id
        .ok_or(Error::Validation("equipamento_id is required"))?;

    sala_repository
        .attach_equipamento(sala_id, equipamento_id)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Error::EquipamentoAttached,
            _ => Error::DbErr(err),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Equipamento added to sala successfully".to_string(),
        }),
    ))
}

/// Detach an equipamento from a sala
#[utoipa::path(
    delete,
    path = "/api/salas/{sala_id}/equipamentos/{equipamento_id}",
    tag = SALA_TAG,
    params(
        ("sala_id" = i32, Path, description = "Sala ID"),
        ("equipamento_id" = i32, Path, description = "Equipamento ID")
    ),
    responses(
        (status = 200, description = "Success when detaching the equipamento", body = MessageDto),
        (status = 404, description = "The equipamento is not attached to the sala", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_equipamento(
    State(state): State<AppState>,
    Path((sala_id, equipamento_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let sala_repository = SalaRepository::new(&state.db);

    let result = sala_repository
        .detach_equipamento(sala_id, equipamento_id)
        .await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Relationship"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Equipamento removed from sala successfully".to_string(),
        }),
    ))
}

fn to_dto(sala: entity::sala::Model) -> SalaDto {
    SalaDto {
        sala_id: sala.sala_id,
        nome: sala.nome,
        descricao: sala.descricao,
        capacidade: sala.capacidade,
        bloco_id: sala.bloco_id,
    }
}
