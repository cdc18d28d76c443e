use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Where bearer token signing keys come from.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSource {
    /// RS256 keys published by the issuer at `https://{domain}/.well-known/jwks.json`.
    Auth0 { domain: String },
    /// HS256 shared secret, for local development.
    Secret(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub api_audience: String,
    pub auth_source: AuthSource,

    /// Drop and recreate the schema on startup, then seed the demo drink.
    pub reset_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// `AUTH0_DOMAIN` takes precedence over `JWT_SECRET` when both are set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `API_AUDIENCE` not set
    /// - `Err(ConfigError::MissingAuthSource)` - Neither `AUTH0_DOMAIN` nor `JWT_SECRET` set
    /// - `Err(ConfigError::InvalidEnvVar)` - `RESET_DATABASE` isn't a boolean
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let auth_source = match (
            lookup("AUTH0_DOMAIN").filter(|v| !v.is_empty()),
            lookup("JWT_SECRET").filter(|v| !v.is_empty()),
        ) {
            (Some(domain), _) => AuthSource::Auth0 { domain },
            (None, Some(secret)) => AuthSource::Secret(secret),
            (None, None) => return Err(ConfigError::MissingAuthSource.into()),
        };

        let reset_database = match lookup("RESET_DATABASE") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "RESET_DATABASE".to_string(),
                value,
            })?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            api_audience: required("API_AUDIENCE")?,
            auth_source,
            reset_database,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
