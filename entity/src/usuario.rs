use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub usuario_id: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    pub senha: String,
    pub data_criacao: DateTimeUtc,
    pub data_atualizacao: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reserva::Entity")]
    Reserva,
}

impl Related<super::reserva::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reserva.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
