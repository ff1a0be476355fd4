mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{bot, config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db.clone());

    let listener = startup::bind_health_listener(&config).await?;
    let health_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = startup::serve_health(listener, health_state).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    let client = bot::start::init_bot(&config, state).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting server");

    let result = bot::start::start_bot(client).await;

    db.close().await?;

    result
}
