use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenVerifier},
};

/// Permissions a token can grant, one per gated drink operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ViewDrinkDetail,
    CreateDrink,
    UpdateDrink,
    DeleteDrink,
}

impl Permission {
    /// Permission string as it appears in the token's `permissions` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDrinkDetail => "get:drinks-detail",
            Self::CreateDrink => "post:drinks",
            Self::UpdateDrink => "patch:drinks",
            Self::DeleteDrink => "delete:drinks",
        }
    }
}

pub struct AuthGuard<'a> {
    verifier: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Verifies the request's bearer token and checks it grants every permission listed.
    ///
    /// Handlers call this before touching the path, the body or the store.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token verified and all permissions granted
    /// - `Err(AppError::AuthErr)` - Header missing or malformed, token invalid, or a
    ///   permission absent
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.verifier.verify(token)?;

        let Some(granted) = claims.permissions.as_ref() else {
            return Err(AuthError::PermissionsMissing.into());
        };

        for permission in permissions {
            if !granted.iter().any(|p| p == permission.as_str()) {
                tracing::debug!(
                    sub = ?claims.sub,
                    "Token lacks required permission {}",
                    permission.as_str()
                );
                return Err(AuthError::PermissionDenied(permission.as_str()).into());
            }
        }

        Ok(claims)
    }
}

/// Extracts the raw token from an `Authorization: Bearer <token>` header.
///
/// # Returns
/// - `Ok(&str)` - The token part of the header
/// - `Err(AuthError::HeaderMissing)` - No `Authorization` header
/// - `Err(AuthError::MalformedHeader)` - Wrong scheme, no token, or extra parts
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader("Authorization header must be valid ASCII."))?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::MalformedHeader("Authorization header must start with \"Bearer\"."),
        ),
        (Some(_), Some(token), None) => Ok(token),
        (Some(_), None, _) => Err(AuthError::MalformedHeader("Token not found.")),
        (Some(_), Some(_), Some(_)) => Err(AuthError::MalformedHeader(
            "Authorization header must be bearer token.",
        )),
        (None, _, _) => Err(AuthError::MalformedHeader(
            "Authorization header must start with \"Bearer\".",
        )),
    }
}
