//! Drink menu REST backend.
//!
//! `model` holds the wire DTOs shared by every endpoint; `server` holds the Axum backend.

pub mod model;
pub mod server;
