use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A piece of equipment that can be attached to salas
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EquipamentoDto {
    pub equipamento_id: i32,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub quantidade: i32,
}

/// Request body for creating or updating an equipamento
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EquipamentoPayload {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    /// Required, zero is accepted
    pub quantidade: Option<i32>,
}
