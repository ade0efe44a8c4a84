//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main reserva crate
//! to ensure consistency across tests.

/// Type alias for bloco database model.
pub type BlocoModel = entity::bloco::Model;

/// Type alias for equipamento database model.
pub type EquipamentoModel = entity::equipamento::Model;

/// Type alias for reserva database model.
pub type ReservaModel = entity::reserva::Model;

/// Type alias for sala database model.
pub type SalaModel = entity::sala::Model;

/// Type alias for the sala to equipamento association model.
pub type SalaEquipamentoModel = entity::sala_equipamento::Model;

/// Type alias for usuario database model.
pub type UsuarioModel = entity::usuario::Model;
