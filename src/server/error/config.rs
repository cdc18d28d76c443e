use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value can't be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// Neither `AUTH0_DOMAIN` nor `JWT_SECRET` is set, so no token can ever verify.
    #[error("One of AUTH0_DOMAIN or JWT_SECRET must be set")]
    MissingAuthSource,
}
