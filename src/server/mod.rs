//! Server application core modules.
//!
//! This module contains all server-side functionality for the reserva application, including
//! HTTP routing, database repositories, reservation conflict checking, and startup wiring.
//! It provides the complete backend for managing blocos, salas, equipamentos, usuarios, and
//! the reservas that tie them together.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
