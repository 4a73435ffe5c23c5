//! Discord REST access used by the starboard engine.
//!
//! `ChatClient` lists the handful of platform calls the engine makes. The production
//! implementation, `SerenityChatClient`, forwards them to Serenity's HTTP client and
//! reports 404 responses as `AppError::NotFound`, which the engine treats as a
//! deleted repost.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateMessage, EditMessage, GuildChannel, Message, MessageId,
        ReactionType, UserId,
    },
    http::{Http, HttpError},
};

use crate::error::AppError;

/// Page size used when listing the users behind a reaction. Discord's maximum.
const REACTION_PAGE_SIZE: u8 = 100;

/// Discord operations consumed by the starboard engine.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fetches a guild channel.
    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<GuildChannel, AppError>;

    /// Fetches a message. Fails with `AppError::NotFound` if it no longer exists.
    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, AppError>;

    /// Counts the users currently reacting to a message with `emoji`.
    async fn count_reactions(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<u64, AppError>;

    /// Sends a message with text content and a single embed.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<Message, AppError>;

    /// Replaces the content and embed of an existing message.
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<(), AppError>;

    /// Removes a single user's reaction from a message.
    async fn remove_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
        user_id: UserId,
    ) -> Result<(), AppError>;
}

/// `ChatClient` backed by Serenity's HTTP client.
pub struct SerenityChatClient {
    http: Arc<Http>,
}

impl SerenityChatClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Converts a Serenity error, mapping 404 responses to `AppError::NotFound`.
///
/// # Arguments
/// - `err` - Error returned by a Serenity HTTP call
/// - `what` - Description of the requested resource, used in the NotFound message
///
/// # Returns
/// - `AppError::NotFound` - Discord answered 404
/// - `AppError::DiscordErr` - Any other failure
fn map_discord_error(err: serenity::Error, what: impl FnOnce() -> String) -> AppError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
        if response.status_code.as_u16() == 404 {
            return AppError::NotFound(what());
        }
    }

    AppError::from(err)
}

#[async_trait]
impl ChatClient for SerenityChatClient {
    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<GuildChannel, AppError> {
        let channel = self
            .http
            .get_channel(channel_id)
            .await
            .map_err(|e| map_discord_error(e, || format!("Channel {} not found", channel_id)))?;

        channel
            .guild()
            .ok_or_else(|| {
                AppError::NotFound(format!("Channel {} is not a guild channel", channel_id))
            })
    }

    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, AppError> {
        self.http
            .get_message(channel_id, message_id)
            .await
            .map_err(|e| {
                map_discord_error(e, || {
                    format!("Message {} not found in channel {}", message_id, channel_id)
                })
            })
    }

    /// Pages through the reacting users until Discord returns a short page.
    async fn count_reactions(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<u64, AppError> {
        let mut count = 0u64;
        let mut after: Option<u64> = None;

        loop {
            let users = self
                .http
                .get_reaction_users(channel_id, message_id, emoji, REACTION_PAGE_SIZE, after)
                .await
                .map_err(|e| {
                    map_discord_error(e, || format!("Message {} not found", message_id))
                })?;

            count += users.len() as u64;

            match users.last() {
                Some(last) if users.len() == REACTION_PAGE_SIZE as usize => {
                    after = Some(last.id.get());
                }
                _ => break,
            }
        }

        Ok(count)
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<Message, AppError> {
        let message = CreateMessage::new().content(content).embed(embed);

        channel_id
            .send_message(&self.http, message)
            .await
            .map_err(|e| map_discord_error(e, || format!("Channel {} not found", channel_id)))
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        let edit_message = EditMessage::new().content(content).embed(embed);

        self.http
            .edit_message(channel_id, message_id, &edit_message, vec![])
            .await
            .map_err(|e| map_discord_error(e, || format!("Message {} not found", message_id)))?;

        Ok(())
    }

    async fn remove_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
        user_id: UserId,
    ) -> Result<(), AppError> {
        self.http
            .delete_reaction(channel_id, message_id, user_id, emoji)
            .await
            .map_err(|e| map_discord_error(e, || format!("Message {} not found", message_id)))
    }
}
