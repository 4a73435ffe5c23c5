use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Reaction, Ready};
use serenity::async_trait;

use crate::service::starboard::lock::MessageLocks;

pub mod guild;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Serialises starboard work per original message.
    pub locks: MessageLocks,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: MessageLocks::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.db, &self.locks, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.db, &self.locks, ctx, removed_reaction).await;
    }
}
