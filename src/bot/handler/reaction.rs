//! Reaction event handlers feeding the starboard engine.
//!
//! Each event is translated into a `ReactionEvent` and run through
//! `StarboardService` while holding the lock for the reacted message. The gateway
//! has no caller to return errors to, so failures are logged with the event context.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Reaction};

use crate::{
    data::{guild_config::GuildConfigRepository, starred_message::StarredMessageRepository},
    model::starboard::ReactionEvent,
    service::{
        discord::SerenityChatClient,
        starboard::{lock::MessageLocks, StarboardService},
    },
};

/// Which engine entry point an event goes to.
#[derive(Clone, Copy, Debug)]
enum ReactionKind {
    Added,
    Removed,
}

/// Handles a reaction being added to a message.
pub async fn handle_reaction_add(
    db: &DatabaseConnection,
    locks: &MessageLocks,
    ctx: Context,
    reaction: Reaction,
) {
    handle_reaction(db, locks, ctx, reaction, ReactionKind::Added).await;
}

/// Handles a reaction being removed from a message.
pub async fn handle_reaction_remove(
    db: &DatabaseConnection,
    locks: &MessageLocks,
    ctx: Context,
    reaction: Reaction,
) {
    handle_reaction(db, locks, ctx, reaction, ReactionKind::Removed).await;
}

/// Converts a gateway reaction into an engine event.
///
/// Returns `None` for reactions outside a guild or without a user.
async fn to_event(ctx: &Context, reaction: &Reaction, kind: ReactionKind) -> Option<ReactionEvent> {
    let guild_id = reaction.guild_id?;
    let user_id = reaction.user_id?;

    let mut event = ReactionEvent {
        guild_id,
        channel_id: reaction.channel_id,
        message_id: reaction.message_id,
        emoji: reaction.emoji.clone(),
        user_id,
        user_is_bot: false,
    };

    // Bot detection only matters for star additions; avoid the lookup otherwise.
    if matches!(kind, ReactionKind::Added) && event.is_star() {
        event.user_is_bot = match reaction.user(ctx).await {
            Ok(user) => user.bot,
            Err(e) => {
                tracing::warn!("Failed to resolve reacting user {}: {:?}", user_id, e);
                false
            }
        };
    }

    Some(event)
}

async fn handle_reaction(
    db: &DatabaseConnection,
    locks: &MessageLocks,
    ctx: Context,
    reaction: Reaction,
    kind: ReactionKind,
) {
    let Some(event) = to_event(&ctx, &reaction, kind).await else {
        return;
    };

    let bot_id = ctx.cache.current_user().id;
    let client = SerenityChatClient::new(ctx.http.clone());
    let guilds = GuildConfigRepository::new(db);
    let starred = StarredMessageRepository::new(db);
    let service = StarboardService::new(&guilds, &starred, &client, bot_id);

    let result = locks
        .with_lock(event.message_id, async {
            match kind {
                ReactionKind::Added => service.on_reaction_added(&event).await,
                ReactionKind::Removed => service.on_reaction_removed(&event).await,
            }
        })
        .await;

    match result {
        Ok(outcome) => tracing::debug!(
            "Reaction {:?} on message {} in guild {} by {}: {:?}",
            kind,
            event.message_id,
            event.guild_id,
            event.user_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to handle reaction {:?} on message {} in channel {} (guild {}): {:?}",
            kind,
            event.message_id,
            event.channel_id,
            event.guild_id,
            e
        ),
    }
}
