//! Ready event handler.
//!
//! Fired once the bot has connected to Discord's gateway and completed the
//! handshake. Logs the connection and sets the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

use crate::model::starboard::STAR_EMOJI;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} ({}) is connected to Discord in {} guilds",
        ready.user.name,
        ready.user.id,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching(format!("for {}", STAR_EMOJI))));
}
