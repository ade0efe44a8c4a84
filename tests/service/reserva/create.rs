//! Tests for ReservaService::create.
//!
//! This module verifies the conflict gate on creation: which existing
//! reservas block a candidate slot, which do not, and how open-ended
//! reservas extend across their day.

use super::*;

/// Tests creating a reserva in an empty sala.
///
/// Verifies that creation succeeds and returns the stored row.
///
/// Expected: Ok with persisted reserva
#[tokio::test]
async fn creates_reserva() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;

    let reserva_service = ReservaService::new(&test.db);
    let result = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 11, 0)),
            usuario_id,
            sala_id,
        )
        .await;

    assert!(result.is_ok());
    let reserva = result.unwrap();

    assert_eq!(reserva.status, ReservaStatus::Confirmada);
    assert_eq!(reserva.usuario_id, Some(usuario_id));
    assert_eq!(reserva.sala_id, Some(sala_id));

    Ok(())
}

/// Tests the three overlap shapes against an existing slot.
///
/// Verifies that candidates starting inside, ending inside, or enclosing an
/// existing confirmada reserva are all rejected.
///
/// Expected: Err with TimeSlotTaken for all three candidates
#[tokio::test]
async fn create_rejects_every_overlap_shape() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    insert_slot(
        &test,
        ReservaStatus::Confirmada,
        9,
        Some(11),
        usuario_id,
        sala_id,
    )
    .await?;

    let reserva_service = ReservaService::new(&test.db);
    let candidates = [(10, 12), (8, 10), (8, 12)];

    for (inicio_hour, fim_hour) in candidates {
        let result = reserva_service
            .create(
                ReservaStatus::Confirmada,
                factory::date(2026, 3, 10),
                factory::datetime(2026, 3, 10, inicio_hour, 0),
                Some(factory::datetime(2026, 3, 10, fim_hour, 0)),
                usuario_id,
                sala_id,
            )
            .await;

        assert!(matches!(result, Err(Error::TimeSlotTaken)));
    }

    Ok(())
}

/// Tests creating around an existing slot.
///
/// Verifies that slots adjacent to an existing reserva on either side pass
/// the gate.
///
/// Expected: Ok for both adjacent slots
#[tokio::test]
async fn create_accepts_adjacent_slots() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    insert_slot(
        &test,
        ReservaStatus::Confirmada,
        9,
        Some(11),
        usuario_id,
        sala_id,
    )
    .await?;

    let reserva_service = ReservaService::new(&test.db);

    let before = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 8, 0),
            Some(factory::datetime(2026, 3, 10, 9, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(before.is_ok());

    let after = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 11, 0),
            Some(factory::datetime(2026, 3, 10, 12, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(after.is_ok());

    Ok(())
}

/// Tests creating in another sala and on another day.
///
/// Verifies that the gate only scans reservas of the same sala on the same
/// data_reserva.
///
/// Expected: Ok for both candidates
#[tokio::test]
async fn create_scopes_gate_to_sala_and_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    let outra_sala = test.fixtures().insert_sala("Sala 102", None).await?;
    insert_slot(
        &test,
        ReservaStatus::Confirmada,
        9,
        Some(11),
        usuario_id,
        sala_id,
    )
    .await?;

    let reserva_service = ReservaService::new(&test.db);

    let other_sala = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 11, 0)),
            usuario_id,
            outra_sala.sala_id,
        )
        .await;
    assert!(other_sala.is_ok());

    let other_day = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 11),
            factory::datetime(2026, 3, 11, 9, 0),
            Some(factory::datetime(2026, 3, 11, 11, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(other_day.is_ok());

    Ok(())
}

/// Tests cancelada reservas on both sides of the gate.
///
/// Verifies that an existing cancelada reserva does not block its slot and
/// that a candidate arriving cancelada is never gated.
///
/// Expected: Ok for both creations
#[tokio::test]
async fn create_ignores_cancelada_on_both_sides() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    insert_slot(
        &test,
        ReservaStatus::Cancelada,
        9,
        Some(11),
        usuario_id,
        sala_id,
    )
    .await?;

    let reserva_service = ReservaService::new(&test.db);

    let over_cancelada = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 11, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(over_cancelada.is_ok());

    let cancelada_candidate = reserva_service
        .create(
            ReservaStatus::Cancelada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 11, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(cancelada_candidate.is_ok());

    Ok(())
}

/// Tests the open-ended reserva blocking the rest of its day.
///
/// Verifies that a reserva without hora_fim conflicts with any later slot on
/// the same day, while the slot before it stays free.
///
/// Expected: Err with TimeSlotTaken after, Ok before
#[tokio::test]
async fn create_open_ended_blocks_rest_of_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    insert_slot(&test, ReservaStatus::Confirmada, 9, None, usuario_id, sala_id).await?;

    let reserva_service = ReservaService::new(&test.db);

    let evening = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 21, 0),
            Some(factory::datetime(2026, 3, 10, 22, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(matches!(evening, Err(Error::TimeSlotTaken)));

    let morning = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 7, 0),
            Some(factory::datetime(2026, 3, 10, 9, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(morning.is_ok());

    Ok(())
}

/// Tests an open-ended candidate against a later slot.
///
/// Verifies that a candidate without hora_fim claims the rest of the day and
/// collides with an existing later reserva.
///
/// Expected: Err with TimeSlotTaken
#[tokio::test]
async fn create_open_ended_candidate_collides_with_later_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    insert_slot(
        &test,
        ReservaStatus::Confirmada,
        15,
        Some(16),
        usuario_id,
        sala_id,
    )
    .await?;

    let reserva_service = ReservaService::new(&test.db);
    let result = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            None,
            usuario_id,
            sala_id,
        )
        .await;

    assert!(matches!(result, Err(Error::TimeSlotTaken)));

    Ok(())
}

/// Tests interval validation on create.
///
/// Verifies that a hora_fim at or before hora_inicio is rejected before
/// anything is written.
///
/// Expected: Err with Validation for both candidates
#[tokio::test]
async fn create_rejects_invalid_interval() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;

    let reserva_service = ReservaService::new(&test.db);

    let inverted = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 11, 0),
            Some(factory::datetime(2026, 3, 10, 9, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(matches!(inverted, Err(Error::Validation(_))));

    let empty = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 9, 0)),
            usuario_id,
            sala_id,
        )
        .await;
    assert!(matches!(empty, Err(Error::Validation(_))));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the service surfaces a database error when the reservas
/// table does not exist.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn create_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let reserva_service = ReservaService::new(&test.db);
    let result = reserva_service
        .create(
            ReservaStatus::Confirmada,
            factory::date(2026, 3, 10),
            factory::datetime(2026, 3, 10, 9, 0),
            Some(factory::datetime(2026, 3, 10, 11, 0)),
            1,
            1,
        )
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
