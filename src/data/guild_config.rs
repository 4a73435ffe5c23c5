//! Guild configuration repository for database operations.
//!
//! This module provides the `GuildConfigStore` trait and its SeaORM-backed
//! implementation, `GuildConfigRepository`. Guild configs are created lazily with
//! default values the first time a guild is observed and are mutated only by the
//! settings commands.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::guild_config::GuildConfig};

/// Persistence for per-guild settings.
#[async_trait]
pub trait GuildConfigStore: Send + Sync {
    /// Returns the config for `guild_id`, inserting the defaults if none exists.
    async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, AppError>;

    /// Persists all settings of `config`, keyed by its guild id.
    async fn save(&self, config: &GuildConfig) -> Result<GuildConfig, AppError>;
}

/// Repository providing database operations for guild configuration.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    /// Creates a new GuildConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the config entity for a guild.
    async fn find_entity(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, AppError> {
        let entity = entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Gets the config for a guild without creating one.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Config found
    /// - `Ok(None)` - The guild has never been observed
    /// - `Err(AppError)` - Database error or corrupted stored id
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        self.find_entity(guild_id)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Inserts a new config row from a domain model.
    async fn insert(&self, config: &GuildConfig) -> Result<GuildConfig, AppError> {
        let entity = entity::guild_config::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(config.guild_id.to_string()),
            prefix: ActiveValue::Set(config.prefix.clone()),
            starboard_channel_id: ActiveValue::Set(
                config.starboard_channel_id.map(|id| id.to_string()),
            ),
            star_threshold: ActiveValue::Set(config.star_threshold as i32),
        }
        .insert(self.db)
        .await?;

        GuildConfig::from_entity(entity)
    }
}

#[async_trait]
impl GuildConfigStore for GuildConfigRepository<'_> {
    /// Gets or creates the config for a guild.
    ///
    /// Called on every reaction event and whenever a guild becomes available, so
    /// every guild the bot has seen ends up with exactly one config row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Existing config, or a freshly inserted default config
    /// - `Err(AppError)` - Database error or corrupted stored id
    async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        if let Some(existing) = self.find_by_guild_id(guild_id).await? {
            return Ok(existing);
        }

        self.insert(&GuildConfig::new(guild_id)).await
    }

    /// Saves the prefix, starboard channel and threshold of a guild.
    ///
    /// Updates the row matching `config.guild_id`, inserting it if the guild has not
    /// been seen before.
    ///
    /// # Arguments
    /// - `config` - The settings to persist
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored config
    /// - `Err(AppError)` - Database error
    async fn save(&self, config: &GuildConfig) -> Result<GuildConfig, AppError> {
        let Some(existing) = self.find_entity(config.guild_id).await? else {
            return self.insert(config).await;
        };

        let mut active: entity::guild_config::ActiveModel = existing.into();
        active.prefix = ActiveValue::Set(config.prefix.clone());
        active.starboard_channel_id =
            ActiveValue::Set(config.starboard_channel_id.map(|id| id.to_string()));
        active.star_threshold = ActiveValue::Set(config.star_threshold as i32);

        let entity = active.update(self.db).await?;

        GuildConfig::from_entity(entity)
    }
}
