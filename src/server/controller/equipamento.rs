use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        equipamento::{EquipamentoDto, EquipamentoPayload},
    },
    server::{data::equipamento::EquipamentoRepository, error::Error, model::app::AppState},
};

pub static EQUIPAMENTO_TAG: &str = "equipamentos";

/// List all equipamentos
#[utoipa::path(
    get,
    path = "/api/equipamentos",
    tag = EQUIPAMENTO_TAG,
    responses(
        (status = 200, description = "Success when listing equipamentos", body = Vec<EquipamentoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipamentos(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let equipamento_repository = EquipamentoRepository::new(&state.db);

    let equipamentos = equipamento_repository.list().await?;

    let equipamento_dtos: Vec<EquipamentoDto> = equipamentos.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(equipamento_dtos)))
}

/// Get an equipamento by id
#[utoipa::path(
    get,
    path = "/api/equipamentos/{equipamento_id}",
    tag = EQUIPAMENTO_TAG,
    params(
        ("equipamento_id" = i32, Path, description = "Equipamento ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the equipamento", body = EquipamentoDto),
        (status = 404, description = "Equipamento not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipamento(
    State(state): State<AppState>,
    Path(equipamento_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let equipamento_repository = EquipamentoRepository::new(&state.db);

    let Some(equipamento) = equipamento_repository.get_by_id(equipamento_id).await? else {
        return Err(Error::NotFound("Equipamento"));
    };

    Ok((StatusCode::OK, Json(to_dto(equipamento))))
}

/// Create a new equipamento
#[utoipa::path(
    post,
    path = "/api/equipamentos",
    tag = EQUIPAMENTO_TAG,
    request_body = EquipamentoPayload,
    responses(
        (status = 201, description = "Success when creating the equipamento", body = EquipamentoDto),
        (status = 400, description = "Quantidade is missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipamento(
    State(state): State<AppState>,
    Json(payload): Json<EquipamentoPayload>,
) -> Result<impl IntoResponse, Error> {
    let equipamento_repository = EquipamentoRepository::new(&state.db);

    // Zero is a valid quantidade, only absence is rejected
    let quantidade = payload
        .quantidade
        .ok_or(Error::Validation("Quantidade is required"))?;

    let equipamento = equipamento_repository
        .create(payload.nome, payload.descricao, quantidade)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(equipamento))))
}

/// Update an equipamento
#[utoipa::path(
    put,
    path = "/api/equipamentos/{equipamento_id}",
    tag = EQUIPAMENTO_TAG,
    params(
        ("equipamento_id" = i32, Path, description = "Equipamento ID")
    ),
    request_body = EquipamentoPayload,
    responses(
        (status = 200, description = "Success when updating the equipamento", body = EquipamentoDto),
        (status = 400, description = "Quantidade is missing", body = ErrorDto),
        (status = 404, description = "Equipamento not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipamento(
    State(state): State<AppState>,
    Path(equipamento_id): Path<i32>,
    Json(payload): Json<EquipamentoPayload>,
) -> Result<impl IntoResponse, Error> {
    let equipamento_repository = EquipamentoRepository::new(&state.db);

    let quantidade = payload
        .quantidade
        .ok_or(Error::Validation("Quantidade is required"))?;

    let Some(equipamento) = equipamento_repository
        .update(equipamento_id, payload.nome, payload.descricao, quantidade)
        .await?
    else {
        return Err(Error::NotFound("Equipamento"));
    };

    Ok((StatusCode::OK, Json(to_dto(equipamento))))
}

/// Delete an equipamento
#[utoipa::path(
    delete,
    path = "/api/equipamentos/{equipamento_id}",
    tag = EQUIPAMENTO_TAG,
    params(
        ("equipamento_id" = i32, Path, description = "Equipamento ID")
    ),
    responses(
        (status = 200, description = "Success when deleting the equipamento", body = MessageDto),
        (status = 404, description = "Equipamento not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_equipamento(
    State(state): State<AppState>,
    Path(equipamento_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let equipamento_repository = EquipamentoRepository::new(&state.db);

    let result = equipamento_repository.delete(equipamento_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Equipamento"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Equipamento deleted successfully".to_string(),
        }),
    ))
}

fn to_dto(equipamento: entity::equipamento::Model) -> EquipamentoDto {
    EquipamentoDto {
        equipamento_id: equipamento.equipamento_id,
        nome: equipamento.nome,
        descricao: equipamento.descricao,
        quantidade: equipamento.quantidade,
    }
}
