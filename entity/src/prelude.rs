pub use super::bloco::Entity as Bloco;
pub use super::equipamento::Entity as Equipamento;
pub use super::reserva::Entity as Reserva;
pub use super::sala::Entity as Sala;
pub use super::sala_equipamento::Entity as SalaEquipamento;
pub use super::usuario::Entity as Usuario;
