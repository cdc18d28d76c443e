//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::token::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenVerifier>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the drink store.
    pub db: DatabaseConnection,

    /// Bearer token verifier holding the issuer's signing keys.
    ///
    /// Keys are loaded once at startup and never mutated afterwards.
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verifier` - Token verifier built during startup
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, verifier: Arc<TokenVerifier>) -> Self {
        Self { db, verifier }
    }
}
