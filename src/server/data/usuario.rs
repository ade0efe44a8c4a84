use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct UsuarioRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UsuarioRepository<'a, C> {
    /// Creates a new instance of [`UsuarioRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all usuarios ordered by id
    pub async fn list(&self) -> Result<Vec<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find()
            .order_by_asc(entity::usuario::Column::UsuarioId)
            .all(self.db)
            .await
    }

    /// Finds a usuario by id
    pub async fn get_by_id(
        &self,
        usuario_id: i32,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find_by_id(usuario_id)
            .one(self.db)
            .await
    }

    /// Creates a new usuario, `senha_hash` must already be hashed
    pub async fn create(
        &self,
        nome: String,
        email: String,
        senha_hash: String,
    ) -> Result<entity::usuario::Model, DbErr> {
        let now = Utc::now();
        let usuario = entity::usuario::ActiveModel {
            nome: ActiveValue::Set(nome),
            email: ActiveValue::Set(email),
            senha: ActiveValue::Set(senha_hash),
            data_criacao: ActiveValue::Set(now),
            data_atualizacao: ActiveValue::Set(now),
            ..Default::default()
        };

        usuario.insert(self.db).await
    }

    /// Updates a usuario, keeping the stored senha when `senha_hash` is `None`
    ///
    /// Returns `None` when no usuario exists with the given id.
    pub async fn update(
        &self,
        usuario_id: i32,
        nome: String,
        email: String,
        senha_hash: Option<String>,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        let Some(usuario) = entity::prelude::Usuario::find_by_id(usuario_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut usuario = usuario.into_active_model();
        usuario.nome = ActiveValue::Set(nome);
        usuario.email = ActiveValue::Set(email);
        if let Some(senha_hash) = senha_hash {
            usuario.senha = ActiveValue::Set(senha_hash);
        }
        usuario.data_atualizacao = ActiveValue::Set(Utc::now());

        Ok(Some(usuario.update(self.db).await?))
    }

    /// Deletes a usuario
    ///
    /// Returns OK regardless of the usuario existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, usuario_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Usuario::delete_by_id(usuario_id)
            .exec(self.db)
            .await
    }
}
