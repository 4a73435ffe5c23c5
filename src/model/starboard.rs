//! Input and output types of the starboard engine.

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, UserId};

/// The glyph that counts as a star.
pub const STAR_EMOJI: &str = "⭐";

/// A star-relevant reaction change on a guild message.
///
/// Built by the gateway event handler from Serenity's `Reaction` so the engine
/// does not depend on the shape of gateway payloads.
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub emoji: ReactionType,
    pub user_id: UserId,
    /// Whether the reacting user is a bot account. Unknown on removals, where it
    /// is always `false`.
    pub user_is_bot: bool,
}

impl ReactionEvent {
    /// Returns true if the reaction is the star glyph.
    pub fn is_star(&self) -> bool {
        matches!(&self.emoji, ReactionType::Unicode(name) if name == STAR_EMOJI)
    }
}

/// The branch the engine took for an event.
///
/// Returned so the caller can log the decision and tests can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarboardOutcome {
    /// The guild has no starboard channel configured.
    Disabled,
    /// The reaction was not a star.
    NotAStar,
    /// A self-star, a star on the bot's own message, or a star from a bot was removed.
    SelfStarRemoved,
    /// The message author removed a star from their own message.
    AuthorIgnored,
    /// No repost exists and the count has not reached the threshold.
    BelowThreshold,
    /// A star was removed from a message that was never reposted.
    NotStarred,
    /// A new repost was sent to the starboard channel.
    Reposted,
    /// The existing repost was edited with the current count.
    Updated,
    /// A star was removed but the count did not exceed the stored count.
    Unchanged,
    /// The repost no longer exists and its tracking record was deleted.
    StaleRecordPurged,
}

/// Builds the star reaction type used for counting and removal.
pub fn star_reaction() -> ReactionType {
    ReactionType::Unicode(STAR_EMOJI.to_string())
}
