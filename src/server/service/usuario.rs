use bcrypt::DEFAULT_COST;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{data::usuario::UsuarioRepository, error::Error};

pub struct UsuarioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioService<'a> {
    /// Creates a new instance of [`UsuarioService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a usuario, hashing the senha before it is stored
    ///
    /// An email already in use maps to [`Error::EmailTaken`].
    pub async fn create(
        &self,
        nome: String,
        email: String,
        senha: String,
    ) -> Result<entity::usuario::Model, Error> {
        let usuario_repository = UsuarioRepository::new(self.db);

        let senha_hash = bcrypt::hash(senha, DEFAULT_COST)?;

        usuario_repository
            .create(nome, email, senha_hash)
            .await
            .map_err(email_taken_or_db)
    }

    /// Updates a usuario, re-hashing the senha only when a new one is given
    ///
    /// Returns `None` when no usuario exists with the given id. An email
    /// already registered to another usuario maps to [`Error::EmailTaken`].
    pub async fn update(
        &self,
        usuario_id: i32,
        nome: String,
        email: String,
        senha: Option<String>,
    ) -> Result<Option<entity::usuario::Model>, Error> {
        let usuario_repository = UsuarioRepository::new(self.db);

        let senha_hash = match senha {
            Some(senha) => Some(bcrypt::hash(senha, DEFAULT_COST)?),
            None => None,
        };

        usuario_repository
            .update(usuario_id, nome, email, senha_hash)
            .await
            .map_err(email_taken_or_db)
    }
}

/// Maps unique constraint violations to [`Error::EmailTaken`], the only unique
/// column a usuario has is its email
fn email_taken_or_db(err: sea_orm::DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::EmailTaken,
        _ => Error::DbErr(err),
    }
}
