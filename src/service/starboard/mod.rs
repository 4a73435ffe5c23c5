//! Starboard engine.
//!
//! Reacts to star reactions by reposting popular messages to the guild's starboard
//! channel and keeping the repost's star count current. The engine owns no state:
//! each event re-reads the guild config, the authoritative reaction count and the
//! repost record before deciding, then writes back immediately.
//!
//! - `reaction_add` - reposting, self-star removal and count refresh on additions
//! - `reaction_remove` - count refresh on removals, which never lowers the count
//! - `builder` - the repost embed and content line
//! - `lock` - per-message serialisation used by the event handler

pub mod builder;
pub mod lock;

mod reaction_add;
mod reaction_remove;

#[cfg(test)]
mod test;

use serenity::all::{ChannelId, GuildId, Message, MessageId, Timestamp, UserId};

use crate::{
    data::{guild_config::GuildConfigStore, starred_message::StarredMessageStore},
    error::AppError,
    model::{starboard::StarboardOutcome, starred_message::StarredMessage},
    service::{discord::ChatClient, starboard::builder::build_starboard_embed},
};

pub struct StarboardService<'a> {
    guilds: &'a dyn GuildConfigStore,
    starred: &'a dyn StarredMessageStore,
    client: &'a dyn ChatClient,
    bot_id: UserId,
}

impl<'a> StarboardService<'a> {
    /// Creates a new StarboardService.
    ///
    /// # Arguments
    /// - `guilds` - Store for per-guild settings
    /// - `starred` - Store for repost tracking records
    /// - `client` - Discord API access
    /// - `bot_id` - The bot's own user id, used to ignore stars on its messages
    pub fn new(
        guilds: &'a dyn GuildConfigStore,
        starred: &'a dyn StarredMessageStore,
        client: &'a dyn ChatClient,
        bot_id: UserId,
    ) -> Self {
        Self {
            guilds,
            starred,
            client,
            bot_id,
        }
    }

    /// Builds the embed and content for `message` and sends a new repost.
    ///
    /// # Returns
    /// - `Ok(Message)` - The repost sent to the starboard channel
    /// - `Err(AppError)` - Discord error
    async fn send_repost(
        &self,
        guild_id: GuildId,
        starboard_channel_id: ChannelId,
        message: &Message,
        stars: u64,
    ) -> Result<Message, AppError> {
        let origin = self.client.fetch_channel(message.channel_id).await?;
        let (embed, content) =
            build_starboard_embed(message, guild_id, &origin.name, Timestamp::now(), stars);

        self.client
            .send_message(starboard_channel_id, content, embed)
            .await
    }

    /// Refreshes an existing repost with a new star count.
    ///
    /// Fetches the repost first. If Discord reports it missing, the tracking record
    /// is deleted and nothing is edited. Otherwise the repost is edited in place,
    /// keeping its original timestamp, and the new count is stored.
    ///
    /// # Arguments
    /// - `guild_id` - Guild of the original message
    /// - `starboard_channel_id` - Channel holding the repost
    /// - `message` - The original message
    /// - `record` - Tracking record of the repost
    /// - `stars` - Authoritative star count
    ///
    /// # Returns
    /// - `Ok(StarboardOutcome::Updated)` - Repost edited and count stored
    /// - `Ok(StarboardOutcome::StaleRecordPurged)` - Repost was gone; record deleted
    /// - `Err(AppError)` - Discord error other than NotFound, or database error
    async fn refresh_repost(
        &self,
        guild_id: GuildId,
        starboard_channel_id: ChannelId,
        message: &Message,
        mut record: StarredMessage,
        stars: u64,
    ) -> Result<StarboardOutcome, AppError> {
        let repost_id = MessageId::new(record.repost_message_id);

        let repost = match self
            .client
            .fetch_message(starboard_channel_id, repost_id)
            .await
        {
            Ok(repost) => repost,
            Err(AppError::NotFound(_)) => {
                tracing::warn!(
                    "Repost {} of message {} no longer exists, removing record",
                    repost_id,
                    message.id
                );
                self.starred.delete(record.original_message_id).await?;
                return Ok(StarboardOutcome::StaleRecordPurged);
            }
            Err(e) => return Err(e),
        };

        let origin = self.client.fetch_channel(message.channel_id).await?;
        let (embed, content) =
            build_starboard_embed(message, guild_id, &origin.name, repost.timestamp, stars);

        self.client
            .edit_message(starboard_channel_id, repost.id, content, embed)
            .await?;

        record.star_count = stars;
        self.starred.save(&record).await?;

        Ok(StarboardOutcome::Updated)
    }
}
