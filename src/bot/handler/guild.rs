//! Guild event handler.
//!
//! `guild_create` fires for every guild on startup and whenever the bot joins a new
//! guild. Each one gets a settings row with defaults so the starboard engine and the
//! prefix lookup always find one.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::data::guild_config::{GuildConfigRepository, GuildConfigStore};

/// Handles the guild_create event.
///
/// # Arguments
/// - `db` - Database connection for storing guild settings
/// - `_ctx` - Discord context (unused)
/// - `guild` - The guild that became available
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let repo = GuildConfigRepository::new(db);

    match repo.get_or_create(guild.id.get()).await {
        Ok(config) => {
            if is_new == Some(true) {
                tracing::info!("Joined guild {} ({})", guild.name, guild.id);
            }
            tracing::debug!(
                "Guild {} ({}) loaded with prefix {:?}, starboard {:?}, threshold {}",
                guild.name,
                guild.id,
                config.prefix,
                config.starboard_channel_id,
                config.star_threshold
            );
        }
        Err(e) => {
            tracing::error!("Failed to load settings for guild {}: {:?}", guild.id, e);
        }
    }
}
