use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blocos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub bloco_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub andar: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sala::Entity")]
    Sala,
}

impl Related<super::sala::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sala.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
