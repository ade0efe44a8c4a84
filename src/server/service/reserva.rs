//! Reserva business logic, centered on time-slot conflict detection.
//!
//! A sala can hold at most one non-cancelada reserva per instant. The conflict
//! gate runs inside a serializable transaction together with the write it
//! guards, so two concurrent requests for overlapping slots cannot both pass
//! the check and both commit.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use entity::reserva::ReservaStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, IsolationLevel, TransactionTrait};

use crate::server::{data::reserva::ReservaRepository, error::Error};

pub struct ReservaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservaService<'a> {
    /// Creates a new instance of [`ReservaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reserva once its slot is confirmed to be free
    ///
    /// The slot check and the insert share one serializable transaction. When
    /// the slot is taken nothing is written and [`Error::TimeSlotTaken`] is
    /// returned.
    pub async fn create(
        &self,
        status: ReservaStatus,
        data_reserva: NaiveDate,
        hora_inicio: DateTime<Utc>,
        hora_fim: Option<DateTime<Utc>>,
        usuario_id: i32,
        sala_id: i32,
    ) -> Result<entity::reserva::Model, Error> {
        validate_intervalo(hora_inicio, hora_fim)?;

        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;
        let reserva_repository = ReservaRepository::new(&txn);

        // Cancelada reservas take no slot, so they skip the gate entirely
        if status != ReservaStatus::Cancelada {
            ensure_slot_free(
                &reserva_repository,
                sala_id,
                data_reserva,
                hora_inicio,
                hora_fim,
                None,
            )
            .await?;
        }

        let reserva = reserva_repository
            .create(status, data_reserva, hora_inicio, hora_fim, usuario_id, sala_id)
            .await?;
        txn.commit().await?;

        Ok(reserva)
    }

    /// Updates a reserva, re-running the conflict gate when its slot moves
    ///
    /// The gate runs whenever the update changes `sala_id`, `data_reserva`,
    /// `hora_inicio`, or `hora_fim`, with the updated reserva excluded from
    /// the scan so it cannot conflict with itself. Returns `None` when no
    /// reserva exists with the given id.
    pub async fn update(
        &self,
        reserva_id: i32,
        status: ReservaStatus,
        data_reserva: NaiveDate,
        hora_inicio: DateTime<Utc>,
        hora_fim: Option<DateTime<Utc>>,
        usuario_id: i32,
        sala_id: i32,
    ) -> Result<Option<entity::reserva::Model>, Error> {
        validate_intervalo(hora_inicio, hora_fim)?;

        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;
        let reserva_repository = ReservaRepository::new(&txn);

        let Some(current) = reserva_repository.get_by_id(reserva_id).await? else {
            return Ok(None);
        };

        let slot_moved = current.sala_id != Some(sala_id)
            || current.data_reserva != data_reserva
            || current.hora_inicio != hora_inicio
            || current.hora_fim != hora_fim;
        if slot_moved && status != ReservaStatus::Cancelada {
            ensure_slot_free(
                &reserva_repository,
                sala_id,
                data_reserva,
                hora_inicio,
                hora_fim,
                Some(reserva_id),
            )
            .await?;
        }

        let reserva = reserva_repository
            .update(
                reserva_id,
                status,
                data_reserva,
                hora_inicio,
                hora_fim,
                usuario_id,
                sala_id,
            )
            .await?;
        txn.commit().await?;

        Ok(reserva)
    }
}

/// Rejects the candidate slot when any non-cancelada reserva on the same sala
/// and day overlaps it
async fn ensure_slot_free<C: ConnectionTrait>(
    reserva_repository: &ReservaRepository<'_, C>,
    sala_id: i32,
    data_reserva: NaiveDate,
    hora_inicio: DateTime<Utc>,
    hora_fim: Option<DateTime<Utc>>,
    exclude_reserva_id: Option<i32>,
) -> Result<(), Error> {
    let fim = effective_fim(data_reserva, hora_fim);
    let candidates = reserva_repository
        .find_active_for_slot(sala_id, data_reserva, exclude_reserva_id)
        .await?;

    for existing in candidates {
        let existing_fim = effective_fim(existing.data_reserva, existing.hora_fim);
        if slot_overlaps(existing.hora_inicio, existing_fim, hora_inicio, fim) {
            return Err(Error::TimeSlotTaken);
        }
    }

    Ok(())
}

/// End of the slot a reserva occupies
///
/// A reserva without hora_fim blocks its sala until midnight (UTC) of the day
/// after its data_reserva.
fn effective_fim(data_reserva: NaiveDate, hora_fim: Option<DateTime<Utc>>) -> DateTime<Utc> {
    hora_fim.unwrap_or_else(|| {
        data_reserva.and_time(NaiveTime::MIN).and_utc() + Duration::days(1)
    })
}

/// Whether an existing slot and a candidate slot share any instant, both
/// treated as half-open `[inicio, fim)` intervals
fn slot_overlaps(
    existing_inicio: DateTime<Utc>,
    existing_fim: DateTime<Utc>,
    inicio: DateTime<Utc>,
    fim: DateTime<Utc>,
) -> bool {
    (existing_inicio <= inicio && existing_fim > inicio)
        || (existing_inicio < fim && existing_fim >= fim)
        || (existing_inicio >= inicio && existing_fim <= fim)
}

/// A present hora_fim must land strictly after hora_inicio
fn validate_intervalo(
    hora_inicio: DateTime<Utc>,
    hora_fim: Option<DateTime<Utc>>,
) -> Result<(), Error> {
    match hora_fim {
        Some(hora_fim) if hora_fim <= hora_inicio => {
            Err(Error::Validation("hora_fim must be after hora_inicio"))
        }
        _ => Ok(()),
    }
}
