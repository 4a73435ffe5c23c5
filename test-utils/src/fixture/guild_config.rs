//! Guild config fixtures for creating in-memory test data.

use entity::guild_config;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default command prefix.
pub const DEFAULT_PREFIX: &str = "y.";

/// Default star threshold.
pub const DEFAULT_STAR_THRESHOLD: i32 = 3;

/// Creates a guild config entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - guild_id: `"987654321"`
/// - prefix: `"y."`
/// - starboard_channel_id: `None`
/// - star_threshold: `3`
pub fn entity() -> guild_config::Model {
    guild_config::Model {
        id: 1,
        guild_id: DEFAULT_GUILD_ID.to_string(),
        prefix: DEFAULT_PREFIX.to_string(),
        starboard_channel_id: None,
        star_threshold: DEFAULT_STAR_THRESHOLD,
    }
}

/// Creates a guild config entity builder for customization.
pub fn entity_builder() -> GuildConfigEntityBuilder {
    GuildConfigEntityBuilder { entity: entity() }
}

/// Builder for customizing guild config entity fixtures.
pub struct GuildConfigEntityBuilder {
    entity: guild_config::Model,
}

impl GuildConfigEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity.guild_id = guild_id.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entity.prefix = prefix.into();
        self
    }

    pub fn starboard_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.entity.starboard_channel_id = channel_id;
        self
    }

    pub fn star_threshold(mut self, threshold: i32) -> Self {
        self.entity.star_threshold = threshold;
        self
    }

    pub fn build(self) -> guild_config::Model {
        self.entity
    }
}
