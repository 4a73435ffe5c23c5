use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use serenity::all::{
    ChannelId, CreateEmbed, GuildChannel, GuildId, Message, MessageId, ReactionType, Timestamp,
    UserId,
};
use test_utils::{
    builder::TestBuilder,
    factory::guild_config::GuildConfigFactory,
    serenity::{create_test_channel, create_test_message, TestMessageBuilder},
};

use crate::{
    data::{
        guild_config::GuildConfigRepository,
        starred_message::{StarredMessageRepository, StarredMessageStore},
    },
    error::AppError,
    model::starboard::{star_reaction, ReactionEvent, StarboardOutcome},
    service::{discord::ChatClient, starboard::StarboardService},
};


const GUILD_ID: u64 = 1;
const CHANNEL_ID: u64 = 500;
const STARBOARD_ID: u64 = 600;
const MESSAGE_ID: u64 = 700;
const AUTHOR_ID: u64 = 42;
const REACTOR_ID: u64 = 43;
const BOT_ID: u64 = 999;
/// Creation time Discord assigns to every message sent through the fake client.
const POSTED_AT: &str = "2024-05-01T08:30:00Z";

/// A message sent through the fake client.
#[derive(Debug, Clone)]
struct SentMessage {
    channel_id: u64,
    message_id: u64,
    content: String,
    embed: Value,
}

/// An edit made through the fake client.
#[derive(Debug, Clone)]
struct EditedMessage {
    channel_id: u64,
    message_id: u64,
    content: String,
    embed: Value,
}

#[derive(Default)]
struct FakeState {
    channels: HashMap<u64, GuildChannel>,
    messages: HashMap<(u64, u64), Message>,
    counts: HashMap<u64, u64>,
    next_message_id: u64,
    sent: Vec<SentMessage>,
    edits: Vec<EditedMessage>,
    removed_reactions: Vec<(u64, u64)>,
    /// Channel whose message fetches fail with a non-404 Discord error.
    failing_channel: Option<u64>,
}

/// In-memory Discord used to drive the engine in tests.
///
/// Holds channels, messages and star counts set up by the test and records every
/// send, edit and reaction removal the engine performs.
struct FakeChatClient {
    state: Mutex<FakeState>,
}

impl FakeChatClient {
    fn new() -> Self {
        let client = Self {
            state: Mutex::new(FakeState {
                next_message_id: 10_000,
                ..FakeState::default()
            }),
        };
        client.add_channel(create_test_channel(CHANNEL_ID, GUILD_ID, "general"));
        client.add_channel(create_test_channel(STARBOARD_ID, GUILD_ID, "starboard"));
        let message = create_test_message(MESSAGE_ID, CHANNEL_ID, AUTHOR_ID, "hello");
        client.add_message(message);
        client
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn add_channel(&self, channel: GuildChannel) {
        self.state().channels.insert(channel.id.get(), channel);
    }

    fn add_message(&self, message: Message) {
        self.state()
            .messages
            .insert((message.channel_id.get(), message.id.get()), message);
    }

    /// Simulates a message being deleted by someone other than the bot.
    fn delete_message(&self, channel_id: u64, message_id: u64) {
        self.state().messages.remove(&(channel_id, message_id));
    }

    fn set_stars(&self, message_id: u64, count: u64) {
        self.state().counts.insert(message_id, count);
    }

    /// Makes every message fetch in `channel_id` fail as if Discord were unavailable.
    fn fail_fetches_in(&self, channel_id: u64) {
        self.state().failing_channel = Some(channel_id);
    }

    fn sent(&self) -> Vec<SentMessage> {
        self.state().sent.clone()
    }

    fn edits(&self) -> Vec<EditedMessage> {
        self.state().edits.clone()
    }

    fn removed_reactions(&self) -> Vec<(u64, u64)> {
        self.state().removed_reactions.clone()
    }

    fn not_found(what: &str) -> AppError {
        AppError::NotFound(format!("{} not found", what))
    }
}

#[async_trait]
impl ChatClient for FakeChatClient {
    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<GuildChannel, AppError> {
        self.state()
            .channels
            .get(&channel_id.get())
            .cloned()
            .ok_or_else(|| Self::not_found("Channel"))
    }

    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, AppError> {
        let state = self.state();
        if state.failing_channel == Some(channel_id.get()) {
            return Err(serenity::Error::Other("Discord unavailable").into());
        }

        let message = state
            .messages
            .get(&(channel_id.get(), message_id.get()))
            .cloned();

        message.ok_or_else(|| Self::not_found("Message"))
    }

    async fn count_reactions(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<u64, AppError> {
        assert_eq!(*emoji, star_reaction());
        Ok(self
            .state()
            .counts
            .get(&message_id.get())
            .copied()
            .unwrap_or(0))
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<Message, AppError> {
        let mut state = self.state();
        let message_id = state.next_message_id;
        state.next_message_id += 1;

        let mut message = TestMessageBuilder::new(message_id, channel_id.get(), BOT_ID)
            .content(content.clone())
            .author_bot(true)
            .build();
        message.timestamp = posted_at();

        state
            .messages
            .insert((channel_id.get(), message_id), message.clone());
        state.sent.push(SentMessage {
            channel_id: channel_id.get(),
            message_id,
            content,
            embed: serde_json::to_value(&embed).unwrap(),
        });

        Ok(message)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: String,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        let message = state
            .messages
            .get_mut(&(channel_id.get(), message_id.get()))
            .ok_or_else(|| Self::not_found("Message"))?;
        message.content = content.clone();

        state.edits.push(EditedMessage {
            channel_id: channel_id.get(),
            message_id: message_id.get(),
            content,
            embed: serde_json::to_value(&embed).unwrap(),
        });

        Ok(())
    }

    async fn remove_reaction(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        _emoji: &ReactionType,
        user_id: UserId,
    ) -> Result<(), AppError> {
        self.state()
            .removed_reactions
            .push((message_id.get(), user_id.get()));
        Ok(())
    }
}

fn posted_at() -> Timestamp {
    Timestamp::parse(POSTED_AT).unwrap()
}

/// Builds a star reaction on the test message.
fn star_event(user_id: u64) -> ReactionEvent {
    ReactionEvent {
        guild_id: GuildId::new(GUILD_ID),
        channel_id: ChannelId::new(CHANNEL_ID),
        message_id: MessageId::new(MESSAGE_ID),
        emoji: star_reaction(),
        user_id: UserId::new(user_id),
        user_is_bot: false,
    }
}

/// Stores a config for the test guild with the starboard pointed at the test channel.
async fn enable_starboard(db: &DatabaseConnection, threshold: i32) -> Result<(), AppError> {
    GuildConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .starboard_channel_id(Some(STARBOARD_ID.to_string()))
        .star_threshold(threshold)
        .build()
        .await?;

    Ok(())
}
