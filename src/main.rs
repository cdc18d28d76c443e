use drinks::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let verifier = startup::setup_token_verifier(&config, &http_client).await?;

    tracing::info!("Starting server");

    let app = router::router().with_state(AppState::new(db, verifier));

    startup::serve(&config, app).await
}
