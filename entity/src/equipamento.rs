use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipamentos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub equipamento_id: i32,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub quantidade: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sala_equipamento::Entity")]
    SalaEquipamento,
}

impl Related<super::sala_equipamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalaEquipamento.def()
    }
}

impl Related<super::sala::Entity> for Entity {
    fn to() -> RelationDef {
        super::sala_equipamento::Relation::Sala.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::sala_equipamento::Relation::Equipamento.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
