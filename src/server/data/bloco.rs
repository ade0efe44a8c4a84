use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct BlocoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlocoRepository<'a, C> {
    /// Creates a new instance of [`BlocoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all blocos ordered by id
    pub async fn list(&self) -> Result<Vec<entity::bloco::Model>, DbErr> {
        entity::prelude::Bloco::find()
            .order_by_asc(entity::bloco::Column::BlocoId)
            .all(self.db)
            .await
    }

    /// Finds a bloco by id
    pub async fn get_by_id(&self, bloco_id: i32) -> Result<Option<entity::bloco::Model>, DbErr> {
        entity::prelude::Bloco::find_by_id(bloco_id)
            .one(self.db)
            .await
    }

    /// Creates a new bloco
    pub async fn create(
        &self,
        nome: String,
        descricao: Option<String>,
        andar: Option<String>,
    ) -> Result<entity::bloco::Model, DbErr> {
        let bloco = entity::bloco::ActiveModel {
            nome: ActiveValue::Set(nome),
            descricao: ActiveValue::Set(descricao),
            andar: ActiveValue::Set(andar),
            ..Default::default()
        };

        bloco.insert(self.db).await
    }

    /// Replaces every mutable column of a bloco
    ///
    /// Returns `None` when no bloco exists with the given id.
    pub async fn update(
        &self,
        bloco_id: i32,
        nome: String,
        descricao: Option<String>,
        andar: Option<String>,
    ) -> Result<Option<entity::bloco::Model>, DbErr> {
        let Some(bloco) = entity::prelude::Bloco::find_by_id(bloco_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut bloco = bloco.into_active_model();
        bloco.nome = ActiveValue::Set(nome);
        bloco.descricao = ActiveValue::Set(descricao);
        bloco.andar = ActiveValue::Set(andar);

        Ok(Some(bloco.update(self.db).await?))
    }

    /// Deletes a bloco
    ///
    /// Returns OK regardless of the bloco existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, bloco_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Bloco::delete_by_id(bloco_id)
            .exec(self.db)
            .await
    }
}
