use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A building block containing salas
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlocoDto {
    pub bloco_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub andar: Option<String>,
}

/// Request body for creating or updating a bloco
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlocoPayload {
    /// Required, must be non-empty
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub andar: Option<String>,
}
