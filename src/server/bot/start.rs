use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, state::AppState,
};

/// Initializes the Discord bot client.
///
/// Builds the client with the event handler but does not connect yet, so the caller can
/// keep a handle on the shard manager for shutdown.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - The bot client, ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(state);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function connects the bot and should be called from within a tokio::spawn task
/// since it will block until the shards shut down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
