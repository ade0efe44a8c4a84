use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::equipamento::EquipamentoDto;

/// A sala row as returned by create and update operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SalaDto {
    pub sala_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub capacidade: Option<i32>,
    pub bloco_id: Option<i32>,
}

/// A sala with the name of the bloco it belongs to
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SalaWithBlocoDto {
    pub sala_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub capacidade: Option<i32>,
    pub bloco_id: Option<i32>,
    /// Null when the sala is not assigned to a bloco
    pub bloco_nome: Option<String>,
}

/// Single sala view including its attached equipamentos
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SalaDetailDto {
    pub sala_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub capacidade: Option<i32>,
    pub bloco_id: Option<i32>,
    pub bloco_nome: Option<String>,
    pub equipamentos: Vec<EquipamentoDto>,
}

/// Request body for creating or updating a sala
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SalaPayload {
    /// Required, must be non-empty
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub capacidade: Option<i32>,
    pub bloco_id: Option<i32>,
}

/// Request body for attaching an equipamento to a sala
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachEquipamentoPayload {
    pub equipamento_id: Option<i32>,
}
