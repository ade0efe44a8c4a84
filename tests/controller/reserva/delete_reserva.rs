//! Tests for the delete_reserva endpoint.
//!
//! This module verifies reservation deletion, including the full
//! create-get-delete round trip.

use ::reserva::server::controller::reserva::{create_reserva, delete_reserva, get_reserva};
use sea_orm::EntityTrait;

use super::*;

/// Tests deleting a reserva.
///
/// Verifies that the delete endpoint returns a 200 OK response and removes the
/// row.
///
/// Expected: Ok with 200 OK response and removed row
#[tokio::test]
async fn deletes_reserva() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;
    let reserva = insert_slot(
        &test,
        ReservaStatus::Confirmada,
        9,
        Some(11),
        usuario_id,
        sala_id,
    )
    .await?;

    let result = delete_reserva(State(test.to_app_state()), Path(reserva.reserva_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let remaining = entity::prelude::Reserva::find_by_id(reserva.reserva_id)
        .one(&test.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a nonexistent reserva.
///
/// Verifies that the delete endpoint returns a 404 NOT FOUND response when no
/// reserva has the requested id.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn delete_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = delete_reserva(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert!(matches!(error, Error::NotFound("Reserva")));
    let resp = error.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the create, get, delete, get round trip.
///
/// Verifies that a created reserva is retrievable, then gone after deletion,
/// with the final retrieval answering 404 NOT FOUND.
///
/// Expected: 201, 200, 200, then 404 responses in order
#[tokio::test]
async fn create_get_delete_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let (usuario_id, sala_id) = insert_slot_owner(&test).await?;

    let result = create_reserva(
        State(test.to_app_state()),
        Json(reserva_payload(
            ReservaStatus::Pendente,
            9,
            Some(11),
            usuario_id,
            sala_id,
        )),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let reserva = entity::prelude::Reserva::find()
        .one(&test.db)
        .await?
        .unwrap();

    let result = get_reserva(State(test.to_app_state()), Path(reserva.reserva_id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = delete_reserva(State(test.to_app_state()), Path(reserva.reserva_id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_reserva(State(test.to_app_state()), Path(reserva.reserva_id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
