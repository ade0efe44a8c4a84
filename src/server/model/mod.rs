//! Server application models and type definitions.
//!
//! This module contains data models internal to the server application, currently
//! the shared application state handed to every Axum handler.

pub mod app;
