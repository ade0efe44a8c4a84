use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        bloco::{BlocoDto, BlocoPayload},
    },
    server::{data::bloco::BlocoRepository, error::Error, model::app::AppState},
};

pub static BLOCO_TAG: &str = "blocos";

/// List all blocos
#[utoipa::path(
    get,
    path = "/api/blocos",
    tag = BLOCO_TAG,
    responses(
        (status = 200, description = "Success when listing blocos", body = Vec<BlocoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blocos(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let bloco_repository = BlocoRepository::new(&state.db);

    let blocos = bloco_repository.list().await?;

    let bloco_dtos: Vec<BlocoDto> = blocos.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(bloco_dtos)))
}

/// Get a bloco by id
#[utoipa::path(
    get,
    path = "/api/blocos/{bloco_id}",
    tag = BLOCO_TAG,
    params(
        ("bloco_id" = i32, Path, description = "Bloco ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the bloco", body = BlocoDto),
        (status = 404, description = "Bloco not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bloco(
    State(state): State<AppState>,
    Path(bloco_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bloco_repository = BlocoRepository::new(&state.db);

    let Some(bloco) = bloco_repository.get_by_id(bloco_id).await? else {
        return Err(Error::NotFound("Bloco"));
    };

    Ok((StatusCode::OK, Json(to_dto(bloco))))
}

/// Create a new bloco
#[utoipa::path(
    post,
    path = "/api/blocos",
    tag = BLOCO_TAG,
    request_body = BlocoPayload,
    responses(
        (status = 201, description = "Success when creating the bloco", body = BlocoDto),
        (status = 400, description = "Nome is missing or empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bloco(
    State(state): State<AppState>,
    Json(payload): Json<BlocoPayload>,
) -> Result<impl IntoResponse, Error> {
    let bloco_repository = BlocoRepository::new(&state.db);

    let nome = payload
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(Error::Validation("Nome is required"))?;

    let bloco = bloco_repository
        .create(nome, payload.descricao, payload.andar)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(bloco))))
}

/// Update a bloco
#[utoipa::path(
    put,
    path = "/api/blocos/{bloco_id}",
    tag = BLOCO_TAG,
    params(
        ("bloco_id" = i32, Path, description = "Bloco ID")
    ),
    request_body = BlocoPayload,
    responses(
        (status = 200, description = "Success when updating the bloco", body = BlocoDto),
        (status = 400, description = "Nome is missing or empty", body = ErrorDto),
        (status = 404, description = "Bloco not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bloco(
    State(state): State<AppState>,
    Path(bloco_id): Path<i32>,
    Json(payload): Json<BlocoPayload>,
) -> Result<impl IntoResponse, Error> {
    let bloco_repository = BlocoRepository::new(&state.db);

    let nome = payload
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(Error::Validation("Nome is required"))?;

    let Some(bloco) = bloco_repository
        .update(bloco_id, nome, payload.descricao, payload.andar)
        .await?
    else {
        return Err(Error::NotFound("Bloco"));
    };

    Ok((StatusCode::OK, Json(to_dto(bloco))))
}

/// Delete a bloco
#[utoipa::path(
    delete,
    path = "/api/blocos/{bloco_id}",
    tag = BLOCO_TAG,
    params(
        ("bloco_id" = i32, Path, description = "Bloco ID")
    ),
    responses(
        (status = 200, description = "Success when deleting the bloco", body = MessageDto),
        (status = 404, description = "Bloco not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bloco(
    State(state): State<AppState>,
    Path(bloco_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bloco_repository = BlocoRepository::new(&state.db);

    let result = bloco_repository.delete(bloco_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Bloco"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Bloco deleted successfully".to_string(),
        }),
    ))
}

fn to_dto(bloco: entity::bloco::Model) -> BlocoDto {
    BlocoDto {
        bloco_id: bloco.bloco_id,
        nome: bloco.nome,
        descricao: bloco.descricao,
        andar: bloco.andar,
    }
}
