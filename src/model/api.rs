use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `error` field in an error body.
///
/// Generic failures carry the numeric HTTP status; authorization failures carry the
/// machine-readable code reported by the token verifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorCode {
    Status(u16),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: ErrorCode,
    pub message: String,
}

impl ErrorDto {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorCode::Status(status),
            message: message.into(),
        }
    }

    pub fn named(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorCode::Named(code.into()),
            message: message.into(),
        }
    }
}
