use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "salas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sala_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub capacidade: Option<i32>,
    pub bloco_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bloco::Entity",
        from = "Column::BlocoId",
        to = "super::bloco::Column::BlocoId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Bloco,
    #[sea_orm(has_many = "super::reserva::Entity")]
    Reserva,
    #[sea_orm(has_many = "super::sala_equipamento::Entity")]
    SalaEquipamento,
}

impl Related<super::bloco::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bloco.def()
    }
}

impl Related<super::reserva::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reserva.def()
    }
}

impl Related<super::equipamento::Entity> for Entity {
    fn to() -> RelationDef {
        super::sala_equipamento::Relation::Equipamento.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::sala_equipamento::Relation::Sala.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
