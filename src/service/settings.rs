//! Guild settings changed through the `settings` commands.

use crate::{
    data::guild_config::GuildConfigStore,
    error::AppError,
    model::guild_config::{GuildConfig, MAX_STAR_THRESHOLD, MIN_STAR_THRESHOLD},
};

/// Longest prefix a guild may configure.
pub const MAX_PREFIX_LENGTH: usize = 16;

pub struct SettingsService<'a> {
    guilds: &'a dyn GuildConfigStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(guilds: &'a dyn GuildConfigStore) -> Self {
        Self { guilds }
    }

    /// Gets the settings of a guild, creating defaults if needed.
    pub async fn get(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        self.guilds.get_or_create(guild_id).await
    }

    /// Sets or clears the starboard channel of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - New starboard channel, or `None` to disable the starboard
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The updated settings
    /// - `Err(AppError)` - Database error
    pub async fn set_starboard_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<GuildConfig, AppError> {
        let mut config = self.guilds.get_or_create(guild_id).await?;
        config.starboard_channel_id = channel_id;

        self.guilds.save(&config).await
    }

    /// Sets the star threshold of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `stars` - Requested threshold as typed by the user
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The updated settings
    /// - `Err(AppError::BadRequest)` - Threshold outside the accepted range
    /// - `Err(AppError)` - Database error
    pub async fn set_star_threshold(
        &self,
        guild_id: u64,
        stars: i64,
    ) -> Result<GuildConfig, AppError> {
        let valid = u64::try_from(stars).is_ok_and(GuildConfig::is_valid_threshold);
        if !valid {
            return Err(AppError::BadRequest(format!(
                "Can't set stars to {}, number must be between {} and {}",
                stars, MAX_STAR_THRESHOLD, MIN_STAR_THRESHOLD
            )));
        }

        let mut config = self.guilds.get_or_create(guild_id).await?;
        config.star_threshold = stars as u64;

        self.guilds.save(&config).await
    }

    /// Sets the command prefix of a guild.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The updated settings
    /// - `Err(AppError::BadRequest)` - Prefix empty, too long or containing whitespace
    /// - `Err(AppError)` - Database error
    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<GuildConfig, AppError> {
        if prefix.is_empty()
            || prefix.chars().count() > MAX_PREFIX_LENGTH
            || prefix.chars().any(char::is_whitespace)
        {
            return Err(AppError::BadRequest(format!(
                "Prefix must be 1 to {} characters without spaces",
                MAX_PREFIX_LENGTH
            )));
        }

        let mut config = self.guilds.get_or_create(guild_id).await?;
        config.prefix = prefix.to_string();

        self.guilds.save(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::guild_config::GuildConfigRepository;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn sets_and_clears_starboard_channel() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let repo = GuildConfigRepository::new(db);
        let service = SettingsService::new(&repo);

        let config = service.set_starboard_channel(1, Some(600)).await?;
        assert_eq!(config.starboard_channel_id, Some(600));

        let config = service.set_starboard_channel(1, None).await?;
        assert_eq!(config.starboard_channel_id, None);
        assert_eq!(service.get(1).await?.starboard_channel_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_threshold_out_of_range() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let repo = GuildConfigRepository::new(db);
        let service = SettingsService::new(&repo);

        for stars in [0, 21, -3] {
            match service.set_star_threshold(1, stars).await {
                Err(AppError::BadRequest(message)) => assert_eq!(
                    message,
                    format!(
                        "Can't set stars to {}, number must be between 20 and 1",
                        stars
                    )
                ),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }

        assert_eq!(service.get(1).await?.star_threshold, 3);

        Ok(())
    }

    #[tokio::test]
    async fn sets_threshold_at_bounds() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let repo = GuildConfigRepository::new(db);
        let service = SettingsService::new(&repo);

        assert_eq!(service.set_star_threshold(1, 1).await?.star_threshold, 1);
        assert_eq!(service.set_star_threshold(1, 20).await?.star_threshold, 20);

        Ok(())
    }

    #[tokio::test]
    async fn validates_prefix() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let repo = GuildConfigRepository::new(db);
        let service = SettingsService::new(&repo);

        assert!(matches!(
            service.set_prefix(1, "").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.set_prefix(1, "a b").await,
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(service.set_prefix(1, "s!").await?.prefix, "s!");

        Ok(())
    }
}
