//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! work with domain models rather than DTOs or entity models, and report failures with
//! typed domain errors that controllers translate into HTTP responses.
//!
//! - `drink` orchestrates the drink repository and recipe decoding
//! - `token` verifies bearer tokens against the issuer's signing keys

pub mod drink;
pub mod token;
