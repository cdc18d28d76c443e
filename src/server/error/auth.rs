use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures raised while verifying a bearer token and its permissions.
///
/// Each variant maps to a fixed status code and a machine-readable code/description pair
/// which are rendered verbatim in the error body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Authorization header is expected.")]
    HeaderMissing,

    /// The header is present but isn't `Bearer <token>`.
    ///
    /// # Fields
    /// - Which part of the header is wrong
    #[error("{0}")]
    MalformedHeader(&'static str),

    /// The token's `exp` claim is in the past.
    #[error("Token expired.")]
    TokenExpired,

    /// The token's audience or issuer doesn't match the configured values.
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    /// The token can't be decoded or its signature doesn't verify.
    #[error("Unable to parse authentication token.")]
    InvalidToken,

    /// The token names a signing key the issuer doesn't publish.
    #[error("Unable to find the appropriate key.")]
    UnknownSigningKey,

    /// The token verified but carries no `permissions` claim.
    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    /// The token lacks the permission the endpoint requires.
    ///
    /// # Fields
    /// - The required permission string
    #[error("Permission not found.")]
    PermissionDenied(&'static str),
}

impl AuthError {
    /// HTTP status the error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::HeaderMissing
            | Self::MalformedHeader(_)
            | Self::TokenExpired
            | Self::InvalidClaims => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::UnknownSigningKey | Self::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            Self::PermissionDenied(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Machine-readable code placed in the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::HeaderMissing => "authorization_header_missing",
            Self::MalformedHeader(_) | Self::InvalidToken | Self::UnknownSigningKey => {
                "invalid_header"
            }
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims | Self::PermissionsMissing => "invalid_claims",
            Self::PermissionDenied(_) => "unauthorized",
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// The status comes from [`AuthError::status`], the `error` field from [`AuthError::code`]
/// and the `message` field from the error's display text. Rejections are logged at debug
/// level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "Rejected request: {:?}", self);

        (
            self.status(),
            Json(ErrorDto::named(self.code(), self.to_string())),
        )
            .into_response()
    }
}
