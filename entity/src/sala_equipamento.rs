use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sala_equipamento")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sala_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub equipamento_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sala::Entity",
        from = "Column::SalaId",
        to = "super::sala::Column::SalaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sala,
    #[sea_orm(
        belongs_to = "super::equipamento::Entity",
        from = "Column::EquipamentoId",
        to = "super::equipamento::Column::EquipamentoId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Equipamento,
}

impl Related<super::sala::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sala.def()
    }
}

impl Related<super::equipamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipamento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
