//! Shared wire models for the reserva HTTP API.
//!
//! These DTOs define the JSON contract between the API and its clients. Field
//! names stay in snake_case Portuguese to match the database columns, so rows
//! serialize without renaming.

pub mod api;
pub mod bloco;
pub mod equipamento;
pub mod reserva;
pub mod sala;
pub mod usuario;
