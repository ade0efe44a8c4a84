use chrono::{DateTime, NaiveDate, Utc};
use entity::reserva::ReservaStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reserva row as returned by create, update, and status operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaDto {
    pub reserva_id: i32,
    pub status: ReservaStatus,
    pub data_reserva: NaiveDate,
    pub hora_inicio: DateTime<Utc>,
    /// Null means the reserva holds the sala until the end of data_reserva
    pub hora_fim: Option<DateTime<Utc>>,
    pub usuario_id: Option<i32>,
    pub sala_id: Option<i32>,
}

/// A reserva list row joined with usuario, sala, and bloco names
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaWithDetailsDto {
    pub reserva_id: i32,
    pub status: ReservaStatus,
    pub data_reserva: NaiveDate,
    pub hora_inicio: DateTime<Utc>,
    pub hora_fim: Option<DateTime<Utc>>,
    pub usuario_id: Option<i32>,
    pub sala_id: Option<i32>,
    pub usuario_nome: Option<String>,
    pub sala_nome: Option<String>,
    pub bloco_nome: Option<String>,
}

/// Single reserva view with usuario contact and sala capacity added
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaDetailDto {
    pub reserva_id: i32,
    pub status: ReservaStatus,
    pub data_reserva: NaiveDate,
    pub hora_inicio: DateTime<Utc>,
    pub hora_fim: Option<DateTime<Utc>>,
    pub usuario_id: Option<i32>,
    pub sala_id: Option<i32>,
    pub usuario_nome: Option<String>,
    pub usuario_email: Option<String>,
    pub sala_nome: Option<String>,
    pub sala_capacidade: Option<i32>,
    pub bloco_nome: Option<String>,
}

/// Request body for creating or updating a reserva
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaPayload {
    pub status: Option<ReservaStatus>,
    pub data_reserva: Option<NaiveDate>,
    pub hora_inicio: Option<DateTime<Utc>>,
    /// Optional. When omitted the reserva blocks the sala until the end of
    /// data_reserva.
    pub hora_fim: Option<DateTime<Utc>>,
    pub usuario_id: Option<i32>,
    pub sala_id: Option<i32>,
}

/// Request body for the status transition endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaStatusPayload {
    pub status: Option<ReservaStatus>,
}
