//! Test fixture helpers for database row creation.
//!
//! Fixtures insert rows through the same entities the application uses, so
//! foreign keys and defaults behave exactly as they do at runtime. Access
//! them through [`TestContext::fixtures`](crate::TestContext::fixtures).

pub mod factory;

use chrono::{DateTime, NaiveDate, Utc};
use entity::reserva::ReservaStatus;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_SENHA},
    error::TestError,
    model::{
        BlocoModel, EquipamentoModel, ReservaModel, SalaEquipamentoModel, SalaModel, UsuarioModel,
    },
    TestContext,
};

impl TestContext {
    pub fn fixtures(&self) -> Fixtures<'_> {
        Fixtures { db: &self.db }
    }
}

pub struct Fixtures<'a> {
    db: &'a DatabaseConnection,
}

impl Fixtures<'_> {
    pub async fn insert_bloco(&self, nome: &str) -> Result<BlocoModel, TestError> {
        Ok(entity::prelude::Bloco::insert(entity::bloco::ActiveModel {
            nome: ActiveValue::Set(nome.to_string()),
            descricao: ActiveValue::Set(Some("Bloco de salas de aula".to_string())),
            andar: ActiveValue::Set(Some("1".to_string())),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    pub async fn insert_sala(
        &self,
        nome: &str,
        bloco_id: Option<i32>,
    ) -> Result<SalaModel, TestError> {
        Ok(entity::prelude::Sala::insert(entity::sala::ActiveModel {
            nome: ActiveValue::Set(nome.to_string()),
            descricao: ActiveValue::Set(Some("Sala de aula padrão".to_string())),
            capacidade: ActiveValue::Set(Some(40)),
            bloco_id: ActiveValue::Set(bloco_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    pub async fn insert_equipamento(
        &self,
        nome: &str,
        quantidade: i32,
    ) -> Result<EquipamentoModel, TestError> {
        Ok(
            entity::prelude::Equipamento::insert(entity::equipamento::ActiveModel {
                nome: ActiveValue::Set(Some(nome.to_string())),
                descricao: ActiveValue::Set(None),
                quantidade: ActiveValue::Set(quantidade),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?,
        )
    }

    /// Insert a usuario with the senha from [`TEST_SENHA`] hashed at the
    /// fixture bcrypt cost.
    pub async fn insert_usuario(&self, nome: &str, email: &str) -> Result<UsuarioModel, TestError> {
        let senha = bcrypt::hash(TEST_SENHA, TEST_BCRYPT_COST)?;
        let now = Utc::now();

        Ok(entity::prelude::Usuario::insert(entity::usuario::ActiveModel {
            nome: ActiveValue::Set(nome.to_string()),
            email: ActiveValue::Set(email.to_string()),
            senha: ActiveValue::Set(senha),
            data_criacao: ActiveValue::Set(now),
            data_atualizacao: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    pub async fn attach_equipamento(
        &self,
        sala_id: i32,
        equipamento_id: i32,
    ) -> Result<SalaEquipamentoModel, TestError> {
        Ok(entity::prelude::SalaEquipamento::insert(
            entity::sala_equipamento::ActiveModel {
                sala_id: ActiveValue::Set(sala_id),
                equipamento_id: ActiveValue::Set(equipamento_id),
            },
        )
        .exec_with_returning(self.db)
        .await?)
    }

    pub async fn insert_reserva(
        &self,
        status: ReservaStatus,
        data_reserva: NaiveDate,
        hora_inicio: DateTime<Utc>,
        hora_fim: Option<DateTime<Utc>>,
        usuario_id: i32,
        sala_id: i32,
    ) -> Result<ReservaModel, TestError> {
        Ok(entity::prelude::Reserva::insert(entity::reserva::ActiveModel {
            status: ActiveValue::Set(status),
            data_reserva: ActiveValue::Set(data_reserva),
            hora_inicio: ActiveValue::Set(hora_inicio),
            hora_fim: ActiveValue::Set(hora_fim),
            usuario_id: ActiveValue::Set(Some(usuario_id)),
            sala_id: ActiveValue::Set(Some(sala_id)),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }
}
