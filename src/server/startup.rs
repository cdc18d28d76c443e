//! Process initialization: logging, database, signing keys, listener.

use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::{AuthSource, Config},
    error::AppError,
    model::drink::Recipe,
    service::token::TokenVerifier,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and brings the schema up to date.
///
/// Pending migrations are applied on every start, which leaves existing drinks in place.
/// When `RESET_DATABASE` is set the schema is dropped and recreated instead, and the demo
/// drink is seeded.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect, migrate or seed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.reset_database {
        tracing::warn!("RESET_DATABASE is set, dropping and recreating all tables");
        Migrator::fresh(&db).await?;
        seed_demo_drink(&db).await?;
    } else {
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Inserts the `water` drink a freshly reset menu starts with.
pub async fn seed_demo_drink(db: &DatabaseConnection) -> Result<entity::drink::Model, AppError> {
    let recipe = Recipe::from_value(serde_json::json!([
        {"name": "water", "color": "blue", "parts": 1}
    ]))
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    let drink = entity::drink::ActiveModel {
        title: ActiveValue::Set("water".to_string()),
        recipe: ActiveValue::Set(recipe.to_stored()?),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Seeded demo drink {}", drink.id);

    Ok(drink)
}

/// Creates an HTTP client with redirects disabled.
///
/// Only used to fetch the issuer's key set.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the token verifier for the configured auth source.
///
/// # Returns
/// - `Ok(TokenVerifier)` - RS256 verifier with the issuer's keys, or HS256 with the secret
/// - `Err(AppError::ReqwestErr)` - Key set couldn't be fetched
/// - `Err(AppError::JwtErr)` - A published key couldn't be loaded
pub async fn setup_token_verifier(
    config: &Config,
    http_client: &reqwest::Client,
) -> Result<Arc<TokenVerifier>, AppError> {
    let verifier = match &config.auth_source {
        AuthSource::Auth0 { domain } => {
            TokenVerifier::fetch(http_client, domain, &config.api_audience).await?
        }
        AuthSource::Secret(secret) => {
            tracing::warn!("Verifying tokens with a shared secret, use AUTH0_DOMAIN in production");
            TokenVerifier::from_secret(secret.as_bytes(), &config.api_audience)
        }
    };

    Ok(Arc::new(verifier))
}

/// Binds the listener and serves `app` until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config, app: axum::Router) -> Result<(), AppError> {
    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
