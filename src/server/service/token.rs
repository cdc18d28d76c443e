//! Bearer token verification.
//!
//! Tokens are issued by an external identity provider. In production the provider publishes
//! its RS256 signing keys as a JSON Web Key Set which is fetched once at startup; locally and
//! in tests a shared HS256 secret is used instead. Either way the verifier checks signature,
//! expiry and audience (plus issuer for the JWKS case) and hands the decoded claims back.

use std::collections::HashMap;

use jsonwebtoken::{
    decode, decode_header, errors::ErrorKind, jwk::JwkSet, Algorithm, DecodingKey, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims the service reads from a verified token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    pub exp: i64,
}

enum SigningKeys {
    /// Issuer-published keys indexed by `kid`.
    Jwks(HashMap<String, DecodingKey>),
    Shared(DecodingKey),
}

pub struct TokenVerifier {
    keys: SigningKeys,
    validation: Validation,
}

impl TokenVerifier {
    /// Builds a verifier for RS256 tokens signed by one of the keys in `jwks`.
    ///
    /// Keys without a `kid` are skipped since tokens select their key by id.
    ///
    /// # Arguments
    /// - `jwks` - Key set published by the issuer
    /// - `domain` - Issuer domain; the expected `iss` is `https://{domain}/`
    /// - `audience` - Expected `aud` claim
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - Verifier ready for use
    /// - `Err(jsonwebtoken::errors::Error)` - A published key couldn't be loaded
    pub fn from_jwks(
        jwks: &JwkSet,
        domain: &str,
        audience: &str,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut keys = HashMap::new();
        for jwk in &jwks.keys {
            if let Some(kid) = &jwk.common.key_id {
                keys.insert(kid.clone(), DecodingKey::from_jwk(jwk)?);
            }
        }

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(&[format!("https://{}/", domain)]);

        Ok(Self {
            keys: SigningKeys::Jwks(keys),
            validation,
        })
    }

    /// Builds a verifier for HS256 tokens signed with a shared secret.
    pub fn from_secret(secret: &[u8], audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);

        Self {
            keys: SigningKeys::Shared(DecodingKey::from_secret(secret)),
            validation,
        }
    }

    /// Fetches the issuer's key set and builds an RS256 verifier from it.
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - Verifier loaded with the published keys
    /// - `Err(AppError::ReqwestErr)` - Key set couldn't be fetched or decoded
    /// - `Err(AppError::JwtErr)` - A published key couldn't be loaded
    pub async fn fetch(
        http_client: &reqwest::Client,
        domain: &str,
        audience: &str,
    ) -> Result<Self, AppError> {
        let url = format!("https://{}/.well-known/jwks.json", domain);

        let jwks = http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        tracing::info!("Loaded {} signing keys from {}", jwks.keys.len(), url);

        Ok(Self::from_jwks(&jwks, domain, audience)?)
    }

    /// Verifies a raw token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature, expiry, audience and issuer all check out
    /// - `Err(AuthError::TokenExpired)` - Token is past its `exp`
    /// - `Err(AuthError::InvalidClaims)` - Wrong audience or issuer
    /// - `Err(AuthError::UnknownSigningKey)` - Token's `kid` isn't in the key set
    /// - `Err(AuthError::InvalidToken)` - Anything else, including a bad signature
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;

        let key = match &self.keys {
            SigningKeys::Shared(key) => key,
            SigningKeys::Jwks(keys) => {
                let kid = header
                    .kid
                    .as_deref()
                    .ok_or(AuthError::MalformedHeader("Authorization malformed."))?;
                // TODO: refetch the key set on an unknown kid so issuer key rotation
                // doesn't require a restart.
                keys.get(kid).ok_or(AuthError::UnknownSigningKey)?
            }
        };

        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
                _ => AuthError::InvalidToken,
            })
    }
}
