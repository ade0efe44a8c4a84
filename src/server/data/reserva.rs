use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use entity::reserva::ReservaStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select,
};

/// A reserva together with the usuario, sala, and bloco rows it points to
pub type ReservaDetails = (
    entity::reserva::Model,
    Option<entity::usuario::Model>,
    Option<entity::sala::Model>,
    Option<entity::bloco::Model>,
);

pub struct ReservaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservaRepository<'a, C> {
    /// Creates a new instance of [`ReservaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all reservas with their usuario, sala, and bloco
    pub async fn list(&self) -> Result<Vec<ReservaDetails>, DbErr> {
        self.with_details(entity::prelude::Reserva::find()).await
    }

    /// Lists the reservas made by a usuario
    pub async fn list_by_usuario(&self, usuario_id: i32) -> Result<Vec<ReservaDetails>, DbErr> {
        self.with_details(
            entity::prelude::Reserva::find()
                .filter(entity::reserva::Column::UsuarioId.eq(usuario_id)),
        )
        .await
    }

    /// Lists the reservas made for a sala
    pub async fn list_by_sala(&self, sala_id: i32) -> Result<Vec<ReservaDetails>, DbErr> {
        self.with_details(
            entity::prelude::Reserva::find().filter(entity::reserva::Column::SalaId.eq(sala_id)),
        )
        .await
    }

    /// Resolves the usuario, sala, and bloco rows for every reserva selected
    ///
    /// Reservas are ordered newest first, by data_reserva and then hora_inicio.
    async fn with_details(
        &self,
        select: Select<entity::prelude::Reserva>,
    ) -> Result<Vec<ReservaDetails>, DbErr> {
        let reservas = select
            .order_by_desc(entity::reserva::Column::DataReserva)
            .order_by_desc(entity::reserva::Column::HoraInicio)
            .find_also_related(entity::usuario::Entity)
            .all(self.db)
            .await?;

        let sala_ids: Vec<i32> = reservas
            .iter()
            .filter_map(|(reserva, _)| reserva.sala_id)
            .collect();
        let salas: HashMap<i32, (entity::sala::Model, Option<entity::bloco::Model>)> =
            if sala_ids.is_empty() {
                HashMap::new()
            } else {
                entity::prelude::Sala::find()
                    .filter(entity::sala::Column::SalaId.is_in(sala_ids))
                    .find_also_related(entity::bloco::Entity)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|(sala, bloco)| (sala.sala_id, (sala, bloco)))
                    .collect()
            };

        Ok(reservas
            .into_iter()
            .map(|(reserva, usuario)| {
                let (sala, bloco) = reserva
                    .sala_id
                    .and_then(|sala_id| salas.get(&sala_id).cloned())
                    .map_or((None, None), |(sala, bloco)| (Some(sala), bloco));

                (reserva, usuario, sala, bloco)
            })
            .collect())
    }

    /// Finds a reserva by id
    pub async fn get_by_id(
        &self,
        reserva_id: i32,
    ) -> Result<Option<entity::reserva::Model>, DbErr> {
        entity::prelude::Reserva::find_by_id(reserva_id)
            .one(self.db)
            .await
    }

    /// Finds a reserva by id with its usuario, sala, and bloco
    pub async fn get_detail(&self, reserva_id: i32) -> Result<Option<ReservaDetails>, DbErr> {
        let Some((reserva, usuario)) = entity::prelude::Reserva::find_by_id(reserva_id)
            .find_also_related(entity::usuario::Entity)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let sala_bloco = match reserva.sala_id {
            Some(sala_id) => {
                entity::prelude::Sala::find_by_id(sala_id)
                    .find_also_related(entity::bloco::Entity)
                    .one(self.db)
                    .await?
            }
            None => None,
        };
        let (sala, bloco) = sala_bloco.map_or((None, None), |(sala, bloco)| (Some(sala), bloco));

        Ok(Some((reserva, usuario, sala, bloco)))
    }

    /// Lists the reservas that can block a slot on the given sala and day
    ///
    /// Cancelada reservas never block a slot. `exclude_reserva_id` leaves out
    /// the reserva being updated so it cannot conflict with itself.
    pub async fn find_active_for_slot(
        &self,
        sala_id: i32,
        data_reserva: NaiveDate,
        exclude_reserva_id: Option<i32>,
    ) -> Result<Vec<entity::reserva::Model>, DbErr> {
        let mut select = entity::prelude::Reserva::find()
            .filter(entity::reserva::Column::SalaId.eq(sala_id))
            .filter(entity::reserva::Column::DataReserva.eq(data_reserva))
            .filter(entity::reserva::Column::Status.ne(ReservaStatus::Cancelada));

        if let Some(reserva_id) = exclude_reserva_id {
            select = select.filter(entity::reserva::Column::ReservaId.ne(reserva_id));
        }

        select.all(self.db).await
    }

    /// Creates a new reserva
    pub async fn create(
        &self,
        status: ReservaStatus,
        data_reserva: NaiveDate,
        hora_inicio: DateTime<Utc>,
        hora_fim: Option<DateTime<Utc>>,
        usuario_id: i32,
        sala_id: i32,
    ) -> Result<entity::reserva::Model, DbErr> {
        let reserva = entity::reserva::ActiveModel {
            status: ActiveValue::Set(status),
            data_reserva: ActiveValue::Set(data_reserva),
            hora_inicio: ActiveValue::Set(hora_inicio),
            hora_fim: ActiveValue::Set(hora_fim),
            usuario_id: ActiveValue::Set(Some(usuario_id)),
            sala_id: ActiveValue::Set(Some(sala_id)),
            ..Default::default()
        };

        reserva.insert(self.db).await
    }

    /// Replaces every mutable column of a reserva
    ///
    /// Returns `None` when no reserva exists with the given id.
    pub async fn update(
        &self,
        reserva_id: i32,
        status: ReservaStatus,
        data_reserva: NaiveDate,
        hora_inicio: DateTime<Utc>,
        hora_fim: Option<DateTime<Utc>>,
        usuario_id: i32,
        sala_id: i32,
    ) -> Result<Option<entity::reserva::Model>, DbErr> {
        let Some(reserva) = entity::prelude::Reserva::find_by_id(reserva_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut reserva = reserva.into_active_model();
        reserva.status = ActiveValue::Set(status);
        reserva.data_reserva = ActiveValue::Set(data_reserva);
        reserva.hora_inicio = ActiveValue::Set(hora_inicio);
        reserva.hora_fim = ActiveValue::Set(hora_fim);
        reserva.usuario_id = ActiveValue::Set(Some(usuario_id));
        reserva.sala_id = ActiveValue::Set(Some(sala_id));

        Ok(Some(reserva.update(self.db).await?))
    }

    /// Updates only the status of a reserva
    ///
    /// Returns `None` when no reserva exists with the given id.
    pub async fn set_status(
        &self,
        reserva_id: i32,
        status: ReservaStatus,
    ) -> Result<Option<entity::reserva::Model>, DbErr> {
        let Some(reserva) = entity::prelude::Reserva::find_by_id(reserva_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut reserva = reserva.into_active_model();
        reserva.status = ActiveValue::Set(status);

        Ok(Some(reserva.update(self.db).await?))
    }

    /// Deletes a reserva
    ///
    /// Returns OK regardless of the reserva existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, reserva_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reserva::delete_by_id(reserva_id)
            .exec(self.db)
            .await
    }
}
