use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct EquipamentoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipamentoRepository<'a, C> {
    /// Creates a new instance of [`EquipamentoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all equipamentos ordered by id
    pub async fn list(&self) -> Result<Vec<entity::equipamento::Model>, DbErr> {
        entity::prelude::Equipamento::find()
            .order_by_asc(entity::equipamento::Column::EquipamentoId)
            .all(self.db)
            .await
    }

    /// Finds an equipamento by id
    pub async fn get_by_id(
        &self,
        equipamento_id: i32,
    ) -> Result<Option<entity::equipamento::Model>, DbErr> {
        entity::prelude::Equipamento::find_by_id(equipamento_id)
            .one(self.db)
            .await
    }

    /// Creates a new equipamento
    pub async fn create(
        &self,
        nome: Option<String>,
        descricao: Option<String>,
        quantidade: i32,
    ) -> Result<entity::equipamento::Model, DbErr> {
        let equipamento = entity::equipamento::ActiveModel {
            nome: ActiveValue::Set(nome),
            descricao: ActiveValue::Set(descricao),
            quantidade: ActiveValue::Set(quantidade),
            ..Default::default()
        };

        equipamento.insert(self.db).await
    }

    /// Replaces every mutable column of an equipamento
    ///
    /// Returns `None` when no equipamento exists with the given id.
    pub async fn update(
        &self,
        equipamento_id: i32,
        nome: Option<String>,
        descricao: Option<String>,
        quantidade: i32,
    ) -> Result<Option<entity::equipamento::Model>, DbErr> {
        let Some(equipamento) = entity::prelude::Equipamento::find_by_id(equipamento_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut equipamento = equipamento.into_active_model();
        equipamento.nome = ActiveValue::Set(nome);
        equipamento.descricao = ActiveValue::Set(descricao);
        equipamento.quantidade = ActiveValue::Set(quantidade);

        Ok(Some(equipamento.update(self.db).await?))
    }

    /// Deletes an equipamento
    ///
    /// Returns OK regardless of the equipamento existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, equipamento_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Equipamento::delete_by_id(equipamento_id)
            .exec(self.db)
            .await
    }
}
