pub mod bloco;
pub mod equipamento;
pub mod prelude;
pub mod reserva;
pub mod sala;
pub mod sala_equipamento;
pub mod usuario;
