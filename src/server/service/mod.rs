//! Service layer for business logic.
//!
//! This module contains the service layer sitting between the controllers and the
//! repositories. Services own the rules that span more than one query: the reserva
//! time-slot conflict gate with its surrounding transaction, and usuario password
//! hashing with unique-email translation.

pub mod reserva;
pub mod usuario;
