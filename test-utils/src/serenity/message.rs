//! Test factory for creating Serenity Message objects.

use serde_json::{json, Value};
use serenity::all::Message;

/// Timestamp given to every test message.
pub const DEFAULT_TIMESTAMP: &str = "2024-01-01T12:00:00.000000+00:00";

/// Builder for test messages with author, nickname and attachment customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::serenity::TestMessageBuilder;
///
/// let message = TestMessageBuilder::new(700, 500, 42)
///     .content("look at this")
///     .author_name("alice")
///     .attachment("https://cdn.example/cat.png")
///     .build();
/// ```
pub struct TestMessageBuilder {
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_name: String,
    author_global_name: Option<String>,
    author_avatar: Option<String>,
    author_bot: bool,
    nick: Option<String>,
    content: String,
    attachments: Vec<Value>,
}

impl TestMessageBuilder {
    /// Creates a builder for a plain text message by a human author.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    /// - `channel_id` - Channel the message was posted in
    /// - `author_id` - Discord user ID of the author
    pub fn new(message_id: u64, channel_id: u64, author_id: u64) -> Self {
        Self {
            message_id,
            channel_id,
            guild_id: None,
            author_id,
            author_name: format!("user{}", author_id),
            author_global_name: None,
            author_avatar: None,
            author_bot: false,
            nick: None,
            content: String::new(),
            attachments: Vec::new(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    pub fn author_global_name(mut self, name: impl Into<String>) -> Self {
        self.author_global_name = Some(name.into());
        self
    }

    /// Sets the author's avatar hash, padded to Discord's 32 character format.
    pub fn author_avatar(mut self, hash: &str) -> Self {
        self.author_avatar = Some(format!("{:0<32}", hash));
        self
    }

    pub fn author_bot(mut self, bot: bool) -> Self {
        self.author_bot = bot;
        self
    }

    /// Sets the author's guild nickname. Implies a guild message.
    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Appends an image attachment served from `url`.
    pub fn attachment(mut self, url: &str) -> Self {
        let id = 900_000 + self.attachments.len() as u64;
        self.attachments.push(json!({
            "id": id.to_string(),
            "filename": "image.png",
            "size": 1024,
            "url": url,
            "proxy_url": url,
            "height": 100,
            "width": 100,
            "content_type": "image/png",
        }));
        self
    }

    /// Builds the Serenity message.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
    pub fn build(self) -> Message {
        let member = self.nick.as_ref().map(|nick| {
            json!({
                "nick": nick,
                "roles": [],
                "joined_at": DEFAULT_TIMESTAMP,
                "deaf": false,
                "mute": false,
                "pending": false,
                "flags": 0,
            })
        });

        serde_json::from_value(json!({
            "id": self.message_id.to_string(),
            "channel_id": self.channel_id.to_string(),
            "guild_id": self.guild_id.map(|id| id.to_string()),
            "author": {
                "id": self.author_id.to_string(),
                "username": self.author_name,
                "discriminator": "0",
                "global_name": self.author_global_name,
                "avatar": self.author_avatar,
                "bot": self.author_bot,
            },
            "member": member,
            "content": self.content,
            "timestamp": DEFAULT_TIMESTAMP,
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": self.attachments,
            "embeds": [],
            "pinned": false,
            "type": 0,
            "flags": 0,
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }
}

/// Creates a test text message with no attachments.
///
/// # Arguments
/// - `message_id` - Discord message ID
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Discord user ID of the author
/// - `content` - Message text
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
) -> Message {
    TestMessageBuilder::new(message_id, channel_id, author_id)
        .content(content)
        .build()
}
