//! Guild config factory for creating test configuration rows.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .starboard_channel_id(Some("111".to_string()))
///     .star_threshold(2)
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    prefix: String,
    starboard_channel_id: Option<String>,
    star_threshold: i32,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique auto-incremented snowflake
    /// - prefix: `"y."`
    /// - starboard_channel_id: `None`
    /// - star_threshold: `3`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let defaults = fixture::guild_config::entity();
        Self {
            db,
            guild_id: next_id().to_string(),
            prefix: defaults.prefix,
            starboard_channel_id: defaults.starboard_channel_id,
            star_threshold: defaults.star_threshold,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn starboard_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.starboard_channel_id = channel_id;
        self
    }

    pub fn star_threshold(mut self, threshold: i32) -> Self {
        self.star_threshold = threshold;
        self
    }

    /// Builds and inserts the guild config into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            prefix: ActiveValue::Set(self.prefix),
            starboard_channel_id: ActiveValue::Set(self.starboard_channel_id),
            star_threshold: ActiveValue::Set(self.star_threshold),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
