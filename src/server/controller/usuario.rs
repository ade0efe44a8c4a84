use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        usuario::{UsuarioDto, UsuarioPayload},
    },
    server::{
        data::usuario::UsuarioRepository, error::Error, model::app::AppState,
        service::usuario::UsuarioService,
    },
};

pub static USUARIO_TAG: &str = "usuarios";

/// List all usuarios
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    responses(
        (status = 200, description = "Success when listing usuarios", body = Vec<UsuarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuarios(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    let usuarios = usuario_repository.list().await?;

    let usuario_dtos: Vec<UsuarioDto> = usuarios.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(usuario_dtos)))
}

/// Get a usuario by id
#[utoipa::path(
    get,
    path = "/api/usuarios/{usuario_id}",
    tag = USUARIO_TAG,
    params(
        ("usuario_id" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the usuario", body = UsuarioDto),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    let Some(usuario) = usuario_repository.get_by_id(usuario_id).await? else {
        return Err(Error::NotFound("Usuario"));
    };

    Ok((StatusCode::OK, Json(to_dto(usuario))))
}

/// Create a new usuario
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    request_body = UsuarioPayload,
    responses(
        (status = 201, description = "Success when creating the usuario", body = UsuarioDto),
        (status = 400, description = "Nome, email, or senha is missing", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(payload): Json<UsuarioPayload>,
) -> Result<impl IntoResponse, Error> {
    let usuario_service = UsuarioService::new(&state.db);

    let (Some(nome), Some(email), Some(senha)) = (
        payload.nome.filter(|nome| !nome.is_empty()),
        payload.email.filter(|email| !email.is_empty()),
        payload.senha.filter(|senha| !senha.is_empty()),
    ) else {
        return Err(Error::Validation("Nome, email, and senha are required"));
    };

    let usuario = usuario_service.create(nome, email, senha).await?;

    Ok((StatusCode::CREATED, Json(to_dto(usuario))))
}

/// Update a usuario
///
/// The senha is replaced only when the payload carries one, omitting it keeps
/// the stored senha.
#[utoipa::path(
    put,
    path = "/api/usuarios/{usuario_id}",
    tag = USUARIO_TAG,
    params(
        ("usuario_id" = i32, Path, description = "Usuario ID")
    ),
    request_body = UsuarioPayload,
    responses(
        (status = 200, description = "Success when updating the usuario", body = UsuarioDto),
        (status = 400, description = "Nome or email is missing", body = ErrorDto),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i32>,
    Json(payload): Json<UsuarioPayload>,
) -> Result<impl IntoResponse, Error> {
    let usuario_service = UsuarioService::new(&state.db);

    let (Some(nome), Some(email)) = (
        payload.nome.filter(|nome| !nome.is_empty()),
        payload.email.filter(|email| !email.is_empty()),
    ) else {
        return Err(Error::Validation("Nome and email are required"));
    };
    let senha = payload.senha.filter(|senha| !senha.is_empty());

    let Some(usuario) = usuario_service.update(usuario_id, nome, email, senha).await? else {
        return Err(Error::NotFound("Usuario"));
    };

    Ok((StatusCode::OK, Json(to_dto(usuario))))
}

/// Delete a usuario
#[utoipa::path(
    delete,
    path = "/api/usuarios/{usuario_id}",
    tag = USUARIO_TAG,
    params(
        ("usuario_id" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Success when deleting the usuario", body = MessageDto),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    let result = usuario_repository.delete(usuario_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("Usuario"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Usuario deleted successfully".to_string(),
        }),
    ))
}

// The senha column never leaves the server, the DTO has no field for it
fn to_dto(usuario: entity::usuario::Model) -> UsuarioDto {
    UsuarioDto {
        usuario_id: usuario.usuario_id,
        nome: usuario.nome,
        email: usuario.email,
        data_criacao: usuario.data_criacao,
        data_atualizacao: usuario.data_atualizacao,
    }
}
