use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A usuario row with the senha hash omitted
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioDto {
    pub usuario_id: i32,
    pub nome: String,
    pub email: String,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

/// Request body for creating or updating a usuario
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioPayload {
    /// Required, must be non-empty
    pub nome: Option<String>,
    /// Required, must be non-empty
    pub email: Option<String>,
    /// Required on create. On update, omitting it keeps the stored senha.
    pub senha: Option<String>,
}
