//! Tests for UsuarioService operations.
//!
//! This module verifies senha hashing on create and update, the
//! keep-senha-when-omitted update path, and the mapping of unique email
//! violations to the conflict error.

use ::reserva::server::{error::Error, service::usuario::UsuarioService};
use reserva_test_utils::constant::TEST_SENHA;

use super::*;

/// Tests creating a usuario.
///
/// Verifies that the service stores a bcrypt hash of the senha that verifies
/// against the original plaintext.
///
/// Expected: Ok with hashed senha
#[tokio::test]
async fn create_hashes_senha() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .create(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "segredo123".to_string(),
        )
        .await;

    assert!(result.is_ok());
    let usuario = result.unwrap();

    assert_ne!(usuario.senha, "segredo123");
    assert!(bcrypt::verify("segredo123", &usuario.senha)?);

    Ok(())
}

/// Tests creating a usuario with an email already in use.
///
/// Verifies that the unique constraint on email surfaces as the email
/// conflict error rather than a raw database error.
///
/// Expected: Err with EmailTaken
#[tokio::test]
async fn create_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    test.fixtures().insert_usuario("Ana", "ana@example.com").await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .create(
            "Outra Ana".to_string(),
            "ana@example.com".to_string(),
            "segredo123".to_string(),
        )
        .await;

    assert!(matches!(result, Err(Error::EmailTaken)));

    Ok(())
}

/// Tests updating a usuario without a new senha.
///
/// Verifies that the stored hash survives an update that only touches nome
/// and email, and that the original senha still verifies against it.
///
/// Expected: Ok with unchanged senha hash
#[tokio::test]
async fn update_keeps_senha_when_omitted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let usuario = test
        .fixtures()
        .insert_usuario("Ana", "ana@example.com")
        .await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .update(
            usuario.usuario_id,
            "Ana Maria".to_string(),
            "ana@example.com".to_string(),
            None,
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();

    assert_eq!(updated.senha, usuario.senha);
    assert!(bcrypt::verify(TEST_SENHA, &updated.senha)?);

    Ok(())
}

/// Tests updating a usuario with a new senha.
///
/// Verifies that the service re-hashes and stores the new senha.
///
/// Expected: Ok with re-hashed senha
#[tokio::test]
async fn update_replaces_senha_when_given() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    let usuario = test
        .fixtures()
        .insert_usuario("Ana", "ana@example.com")
        .await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .update(
            usuario.usuario_id,
            "Ana".to_string(),
            "ana@example.com".to_string(),
            Some("nova-senha".to_string()),
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();

    assert_ne!(updated.senha, usuario.senha);
    assert!(bcrypt::verify("nova-senha", &updated.senha)?);

    Ok(())
}

/// Tests updating a usuario to an email owned by another.
///
/// Verifies that moving onto a taken email surfaces as the email conflict
/// error.
///
/// Expected: Err with EmailTaken
#[tokio::test]
async fn update_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;
    test.fixtures().insert_usuario("Ana", "ana@example.com").await?;
    let bruno = test
        .fixtures()
        .insert_usuario("Bruno", "bruno@example.com")
        .await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .update(
            bruno.usuario_id,
            "Bruno".to_string(),
            "ana@example.com".to_string(),
            None,
        )
        .await;

    assert!(matches!(result, Err(Error::EmailTaken)));

    Ok(())
}

/// Tests updating a nonexistent usuario.
///
/// Verifies that the service returns None when no usuario has the given id.
///
/// Expected: Ok with None
#[tokio::test]
async fn update_returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_reserva_tables().build().await?;

    let usuario_service = UsuarioService::new(&test.db);
    let result = usuario_service
        .update(1, "Ana".to_string(), "ana@example.com".to_string(), None)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
