//! Construction of the repost embed and its content line.

use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, GuildId, Message, Timestamp,
};

use crate::model::starboard::STAR_EMOJI;

/// Embed colour of reposts (gold).
pub const STARBOARD_COLOUR: u32 = 0xF1C40F;

/// Builds the jump link to a guild message.
pub fn message_link(guild_id: GuildId, channel_id: ChannelId, message_id: u64) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel_id, message_id
    )
}

/// Builds the text line shown above a repost, e.g. `⭐ 3 <#123>`.
pub fn starboard_content(stars: u64, channel_id: ChannelId) -> String {
    format!("{} {} <#{}>", STAR_EMOJI, stars, channel_id)
}

/// Name shown for the author of a message: guild nickname, then global display
/// name, then username.
fn author_display_name(message: &Message) -> String {
    message
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .or_else(|| message.author.global_name.clone())
        .unwrap_or_else(|| message.author.name.clone())
}

/// Builds the embed and content line for a repost.
///
/// Deterministic: the same inputs always produce the same embed and content.
///
/// # Arguments
/// - `message` - The original message being reposted
/// - `guild_id` - Guild the original message belongs to, used for the jump link
/// - `channel_name` - Name of the original channel, shown in the footer
/// - `posted_at` - Creation time of the repost; "now" for a new repost
/// - `stars` - Current star count
///
/// # Returns
/// - `(CreateEmbed, String)` - The embed and the `⭐ {count} <#channel>` content line
pub fn build_starboard_embed(
    message: &Message,
    guild_id: GuildId,
    channel_name: &str,
    posted_at: Timestamp,
    stars: u64,
) -> (CreateEmbed, String) {
    let link = message_link(guild_id, message.channel_id, message.id.get());
    let description = format!("**[Jump to message!]({})**\n\n{}", link, message.content);

    let author = CreateEmbedAuthor::new(author_display_name(message))
        .icon_url(message.author.face());

    let mut embed = CreateEmbed::new()
        .description(description)
        .colour(STARBOARD_COLOUR)
        .timestamp(posted_at)
        .author(author)
        .footer(CreateEmbedFooter::new(format!("#{}", channel_name)));

    if let Some(attachment) = message.attachments.first() {
        embed = embed.image(attachment.url.clone());
    }

    (embed, starboard_content(stars, message.channel_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_message, TestMessageBuilder};

    fn posted_at() -> Timestamp {
        Timestamp::parse("2024-02-03T04:05:06Z").unwrap()
    }

    /// Tests the content line format.
    ///
    /// Expected: star glyph, count, then a channel mention of the original channel
    #[test]
    fn formats_content_line() {
        let message = create_test_message(700, 500, 42, "hello");

        let (_, content) =
            build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 3);

        assert_eq!(content, "⭐ 3 <#500>");
    }

    /// Tests the embed body for a text-only message.
    ///
    /// Verifies jump link, body text, colour, footer and author name.
    ///
    /// Expected: embed fields populated, no image
    #[test]
    fn builds_text_embed() {
        let message = TestMessageBuilder::new(700, 500, 42)
            .guild_id(1)
            .content("hello world")
            .author_name("alice")
            .build();

        let (embed, _) =
            build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 5);
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(
            json["description"],
            "**[Jump to message!](https://discord.com/channels/1/500/700)**\n\nhello world"
        );
        assert_eq!(json["color"], STARBOARD_COLOUR);
        assert_eq!(json["footer"]["text"], "#general");
        assert_eq!(json["author"]["name"], "alice");
        assert!(json.get("image").map_or(true, |image| image.is_null()));
    }

    /// Tests that the first attachment is surfaced as the embed image.
    ///
    /// Expected: image url equals the first attachment url
    #[test]
    fn uses_first_attachment_as_image() {
        let message = TestMessageBuilder::new(700, 500, 42)
            .attachment("https://cdn.example/first.png")
            .attachment("https://cdn.example/second.png")
            .build();

        let (embed, _) =
            build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 5);
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["image"]["url"], "https://cdn.example/first.png");
    }

    /// Tests author name precedence.
    ///
    /// Expected: guild nickname wins over global name
    #[test]
    fn prefers_nickname_for_author() {
        let message = TestMessageBuilder::new(700, 500, 42)
            .guild_id(1)
            .author_name("alice")
            .author_global_name("Alice")
            .nick("Al")
            .build();

        let (embed, _) =
            build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 5);
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["author"]["name"], "Al");
    }

    /// Tests determinism of the builder.
    ///
    /// Expected: identical embed and content for identical inputs
    #[test]
    fn is_deterministic() {
        let message = create_test_message(700, 500, 42, "same");

        let first = build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 4);
        let second = build_starboard_embed(&message, GuildId::new(1), "general", posted_at(), 4);

        assert_eq!(first.1, second.1);
        assert_eq!(
            serde_json::to_value(&first.0).unwrap(),
            serde_json::to_value(&second.0).unwrap()
        );
    }
}
