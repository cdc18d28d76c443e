use sea_orm::DbErr;
use thiserror::Error;

use crate::server::error::AppError;

/// Outcome kinds of a failed drink operation.
///
/// Handlers keep the cause typed internally but expose only a coarse status to clients:
/// the public listing collapses everything into 404 via [`DrinkError::into_listing_error`],
/// every other handler goes through `From<DrinkError> for AppError`, which yields 404 for
/// `NotFound` and 422 for everything else.
#[derive(Error, Debug)]
pub enum DrinkError {
    /// No drink has the requested id.
    #[error("Drink with id {0} not found")]
    NotFound(i32),

    /// A field required on create is absent or null.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// The recipe isn't a non-empty list of `{color, parts}` ingredients.
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// The path or body couldn't be extracted from the request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store rejected the operation or returned undecodable data.
    #[error(transparent)]
    Store(#[from] DbErr),
}

impl DrinkError {
    /// Maps any failure of the public short listing to 404.
    pub fn into_listing_error(self) -> AppError {
        tracing::warn!("Failed to list drinks: {}", self);
        AppError::NotFound
    }
}

impl From<DrinkError> for AppError {
    fn from(err: DrinkError) -> Self {
        match &err {
            DrinkError::NotFound(_) => {
                tracing::debug!("{}", err);
                AppError::NotFound
            }
            DrinkError::Store(_) => {
                tracing::warn!("Drink store operation failed: {}", err);
                AppError::Unprocessable
            }
            _ => {
                tracing::debug!("{}", err);
                AppError::Unprocessable
            }
        }
    }
}
