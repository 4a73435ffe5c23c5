//! Per-guild bot settings.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Command prefix used when a guild has not configured one, and in DMs.
pub const DEFAULT_PREFIX: &str = "y.";

/// Stars required for a repost when a guild has not configured a threshold.
pub const DEFAULT_STAR_THRESHOLD: u64 = 3;

/// Smallest threshold accepted by the `setstars` command.
pub const MIN_STAR_THRESHOLD: u64 = 1;

/// Largest threshold accepted by the `setstars` command.
pub const MAX_STAR_THRESHOLD: u64 = 20;

/// Settings for a single guild.
///
/// Created with defaults the first time the bot observes the guild and changed only
/// through the `settings` commands.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Prefix for text commands in this guild.
    pub prefix: String,
    /// Channel receiving reposts. `None` disables the starboard for the guild.
    pub starboard_channel_id: Option<u64>,
    /// Number of stars a message needs before it is reposted.
    pub star_threshold: u64,
}

impl GuildConfig {
    /// Creates the default configuration for a guild.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            prefix: DEFAULT_PREFIX.to_string(),
            starboard_channel_id: None,
            star_threshold: DEFAULT_STAR_THRESHOLD,
        }
    }

    /// Converts an entity model to a guild config domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The converted guild config
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored id is not a valid u64
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let starboard_channel_id = entity
            .starboard_channel_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            guild_id,
            prefix: entity.prefix,
            starboard_channel_id,
            star_threshold: entity.star_threshold.max(0) as u64,
        })
    }

    /// Returns true if `stars` is an acceptable threshold for the `setstars` command.
    pub fn is_valid_threshold(stars: u64) -> bool {
        (MIN_STAR_THRESHOLD..=MAX_STAR_THRESHOLD).contains(&stars)
    }
}
