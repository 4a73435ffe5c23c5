use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{command, handler::Handler, Data},
    config::Config,
    error::AppError,
};

/// Starts the Discord bot and runs until every shard has shut down.
///
/// Builds the poise framework for prefix commands and registers the starboard event
/// handler on the same client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection used by commands and event handlers
/// - `http_client` - HTTP client for commands calling external services
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError)` - Client construction or gateway connection failed
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db.clone());
    let started_at = Utc::now();

    let framework = poise::Framework::builder()
        .options(command::framework_options())
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!("Command framework ready for {}", ready.user.name);
                Ok(Data::new(db, http_client, started_at))
            })
        })
        .build();

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
