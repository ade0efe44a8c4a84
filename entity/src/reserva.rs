use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reserva_id: i32,
    pub status: ReservaStatus,
    pub data_reserva: Date,
    pub hora_inicio: DateTimeUtc,
    pub hora_fim: Option<DateTimeUtc>,
    pub usuario_id: Option<i32>,
    pub sala_id: Option<i32>,
}

/// Lifecycle state of a reserva. Cancelled reservas keep their row but no
/// longer block the time slot.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(25))")]
#[serde(rename_all = "lowercase")]
pub enum ReservaStatus {
    #[sea_orm(string_value = "pendente")]
    Pendente,
    #[sea_orm(string_value = "confirmada")]
    Confirmada,
    #[sea_orm(string_value = "cancelada")]
    Cancelada,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UsuarioId",
        to = "super::usuario::Column::UsuarioId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Usuario,
    #[sea_orm(
        belongs_to = "super::sala::Entity",
        from = "Column::SalaId",
        to = "super::sala::Column::SalaId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Sala,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::sala::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sala.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
