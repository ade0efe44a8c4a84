//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one per table.
//! They are generic over [`sea_orm::ConnectionTrait`] so services can run them against
//! the shared connection pool or inside a transaction.

pub mod bloco;
pub mod equipamento;
pub mod reserva;
pub mod sala;
pub mod usuario;
