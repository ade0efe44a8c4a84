use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct SalaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SalaRepository<'a, C> {
    /// Creates a new instance of [`SalaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all salas with their bloco, ordered by id
    pub async fn list(
        &self,
    ) -> Result<Vec<(entity::sala::Model, Option<entity::bloco::Model>)>, DbErr> {
        entity::prelude::Sala::find()
            .order_by_asc(entity::sala::Column::SalaId)
            .find_also_related(entity::bloco::Entity)
            .all(self.db)
            .await
    }

    /// Finds a sala by id together with its bloco
    pub async fn get_with_bloco(
        &self,
        sala_id: i32,
    ) -> Result<Option<(entity::sala::Model, Option<entity::bloco::Model>)>, DbErr> {
        entity::prelude::Sala::find_by_id(sala_id)
            .find_also_related(entity::bloco::Entity)
            .one(self.db)
            .await
    }

    /// Creates a new sala
    pub async fn create(
        &self,
        nome: String,
        descricao: Option<String>,
        capacidade: Option<i32>,
        bloco_id: Option<i32>,
    ) -> Result<entity::sala::Model, DbErr> {
        let sala = entity::sala::ActiveModel {
            nome: ActiveValue::Set(nome),
            descricao: ActiveValue::Set(descricao),
            capacidade: ActiveValue::Set(capacidade),
            bloco_id: ActiveValue::Set(bloco_id),
            ..Default::default()
        };

        sala.insert(self.db).await
    }

    /// Replaces every mutable column of a sala
    ///
    /// Returns `None` when no sala exists with the given id.
    pub async fn update(
        &self,
        sala_id: i32,
        nome: String,
        descricao: Option<String>,
        capacidade: Option<i32>,
        bloco_id: Option<i32>,
    ) -> Result<Option<entity::sala::Model>, DbErr> {
        let Some(sala) = entity::prelude::Sala::find_by_id(sala_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut sala = sala.into_active_model();
        sala.nome = ActiveValue::Set(nome);
        sala.descricao = ActiveValue::Set(descricao);
        sala.capacidade = ActiveValue::Set(capacidade);
        sala.bloco_id = ActiveValue::Set(bloco_id);

        Ok(Some(sala.update(self.db).await?))
    }

    /// Deletes a sala
    ///
    /// Returns OK regardless of the sala existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, sala_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Sala::delete_by_id(sala_id)
            .exec(self.db)
            .await
    }

    /// Lists the equipamentos attached to a sala
    pub async fn equipamentos(
        &self,
        sala_id: i32,
    ) -> Result<Vec<entity::equipamento::Model>, DbErr> {
        let attachments = entity::prelude::SalaEquipamento::find()
            .filter(entity::sala_equipamento::Column::SalaId.eq(sala_id))
            .find_also_related(entity::equipamento::Entity)
            .all(self.db)
            .await?;

        Ok(attachments
            .into_iter()
            .filter_map(|(_, equipamento)| equipamento)
            .collect())
    }

    /// Attaches an equipamento to a sala
    ///
    /// Fails with a unique constraint violation when the pair already exists.
    pub async fn attach_equipamento(
        &self,
        sala_id: i32,
        equipamento_id: i32,
    ) -> Result<entity::sala_equipamento::Model, DbErr> {
        let attachment = entity::sala_equipamento::ActiveModel {
            sala_id: ActiveValue::Set(sala_id),
            equipamento_id: ActiveValue::Set(equipamento_id),
        };

        entity::prelude::SalaEquipamento::insert(attachment)
            .exec_with_returning(self.db)
            .await
    }

    /// Detaches an equipamento from a sala
    ///
    /// Returns OK regardless of the pair existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn detach_equipamento(
        &self,
        sala_id: i32,
        equipamento_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::SalaEquipamento::delete_by_id((sala_id, equipamento_id))
            .exec(self.db)
            .await
    }
}
