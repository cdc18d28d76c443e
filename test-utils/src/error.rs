use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Signing a test token failed.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Decoding a test fixture such as the key set failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
