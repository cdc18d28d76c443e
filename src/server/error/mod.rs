//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type; it wraps
//! domain-specific errors and implements `IntoResponse` so handlers can return it directly.
//!
//! Every error body uses the same envelope: `{"success": false, "error": ..., "message": ...}`.

pub mod auth;
pub mod config;
pub mod drink;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// The three client-facing variants (`NotFound`, `Unprocessable`, `Forbidden`) carry no
/// detail on purpose: their bodies are fixed. Authorization errors render their own code and
/// description. Infrastructure variants only occur outside request handling or as a last
/// resort and always render as 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for its status code and body.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest, e.g. while fetching signing keys.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Signing key material could not be loaded.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Renders as 404 "Resource not found".
    #[error("Resource not found")]
    NotFound,

    /// Request could not be processed. Renders as 422 "unprocessable".
    #[error("unprocessable")]
    Unprocessable,

    /// Caller lacks access. Renders as 403 "Permission not found".
    #[error("Permission not found")]
    Forbidden,

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Unprocessable`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::status(404, "Resource not found")),
            )
                .into_response(),
            Self::Unprocessable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto::status(422, "unprocessable")),
            )
                .into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::status(403, "Permission not found")),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::status(500, "Internal server error")),
        )
            .into_response()
    }
}
