//! Tests for equipamento controller endpoints.
//!
//! This module verifies equipamento CRUD over HTTP. Equipamentos are the one
//! entity whose nome is optional, so creation is validated on quantidade
//! instead.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ::reserva::model::equipamento::EquipamentoPayload;
use ::reserva::server::controller::equipamento::{
    create_equipamento, delete_equipamento, get_equipamento, get_equipamentos, update_equipamento,
};
use ::reserva::server::error::Error;
use sea_orm::EntityTrait;

use super::*;

fn equipamento_payload(nome: Option<&str>, quantidade: Option<i32>) -> EquipamentoPayload {
    EquipamentoPayload {
        nome: nome.map(str::to_string),
        descricao: Some("Equipamento de projeção".to_string()),
        quantidade,
    }
}

/// Tests listing equipamentos.
///
/// Verifies that the list endpoint returns a 200 OK response once equipamentos
/// have been inserted.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_equipamentos() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    test.fixtures().insert_equipamento("Projetor", 5).await?;
    test.fixtures().insert_equipamento("Quadro branco", 2).await?;

    let result = get_equipamentos(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests retrieving an equipamento by id.
///
/// Verifies that the get endpoint returns a 200 OK response for an existing
/// equipamento and a 404 NOT FOUND response afterwards for an unknown id.
///
/// Expected: Ok with 200 OK response, then Err with 404 NOT_FOUND response
#[tokio::test]
async fn gets_equipamento() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let equipamento = test.fixtures().insert_equipamento("Projetor", 5).await?;

    let result = get_equipamento(
        State(test.to_app_state()),
        Path(equipamento.equipamento_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_equipamento(State(test.to_app_state()), Path(equipamento.equipamento_id + 1))
        .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests creating an equipamento.
///
/// Verifies that the create endpoint returns a 201 CREATED response and that
/// the equipamento row lands in the database.
///
/// Expected: Ok with 201 CREATED response and persisted row
#[tokio::test]
async fn creates_equipamento() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = create_equipamento(
        State(test.to_app_state()),
        Json(equipamento_payload(Some("Projetor"), Some(3))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let equipamentos = entity::prelude::Equipamento::find().all(&test.db).await?;
    assert_eq!(equipamentos.len(), 1);
    assert_eq!(equipamentos[0].quantidade, 3);

    Ok(())
}

/// Tests creating an equipamento without a nome.
///
/// Verifies that a nameless equipamento is accepted, nome is the one optional
/// text column in the schema.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn create_accepts_missing_nome() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = create_equipamento(
        State(test.to_app_state()),
        Json(equipamento_payload(None, Some(1))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating an equipamento with quantidade zero.
///
/// Verifies that zero passes validation, only a missing quantidade is
/// rejected.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn create_accepts_zero_quantidade() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = create_equipamento(
        State(test.to_app_state()),
        Json(equipamento_payload(Some("Projetor"), Some(0))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating an equipamento without a quantidade.
///
/// Verifies that the create endpoint rejects a payload with no quantidade with
/// a 400 BAD REQUEST response carrying the validation message.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_requires_quantidade() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = create_equipamento(
        State(test.to_app_state()),
        Json(equipamento_payload(Some("Projetor"), None)),
    )
    .await;

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert!(matches!(error, Error::Validation("Quantidade is required")));
    let resp = error.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests updating an equipamento.
///
/// Verifies that the update endpoint returns a 200 OK response and overwrites
/// the stored row, including clearing the nome when the payload omits it.
///
/// Expected: Ok with 200 OK response and updated row
#[tokio::test]
async fn updates_equipamento() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let equipamento = test.fixtures().insert_equipamento("Projetor", 5).await?;

    let result = update_equipamento(
        State(test.to_app_state()),
        Path(equipamento.equipamento_id),
        Json(equipamento_payload(None, Some(8))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::Equipamento::find_by_id(equipamento.equipamento_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(updated.nome.is_none());
    assert_eq!(updated.quantidade, 8);

    Ok(())
}

/// Tests updating a nonexistent equipamento.
///
/// Verifies that the update endpoint returns a 404 NOT FOUND response when no
/// equipamento has the requested id.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn update_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = update_equipamento(
        State(test.to_app_state()),
        Path(1),
        Json(equipamento_payload(Some("Projetor"), Some(1))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting an equipamento.
///
/// Verifies that the delete endpoint returns a 200 OK response and that
/// attachments to salas are removed along with the equipamento.
///
/// Expected: Ok with 200 OK response, row and attachments removed
#[tokio::test]
async fn delete_removes_equipamento_and_attachments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let sala = test.fixtures().insert_sala("Sala 101", None).await?;
    let equipamento = test.fixtures().insert_equipamento("Projetor", 5).await?;
    test.fixtures()
        .attach_equipamento(sala.sala_id, equipamento.equipamento_id)
        .await?;

    let result = delete_equipamento(
        State(test.to_app_state()),
        Path(equipamento.equipamento_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let attachments = entity::prelude::SalaEquipamento::find().all(&test.db).await?;
    assert!(attachments.is_empty());

    Ok(())
}

/// Tests deleting a nonexistent equipamento.
///
/// Verifies that the delete endpoint returns a 404 NOT FOUND response when no
/// equipamento has the requested id.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn delete_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let result = delete_equipamento(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
