use super::*;

/// Tests updating every setting of an existing guild.
///
/// Verifies that prefix, starboard channel and threshold are all persisted and
/// that the next read returns the new values.
///
/// Expected: Ok with updated config
#[tokio::test]
async fn updates_existing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let mut config = repo.get_or_create(100).await?;

    config.prefix = "s!".to_string();
    config.starboard_channel_id = Some(200);
    config.star_threshold = 7;

    let saved = repo.save(&config).await?;
    assert_eq!(saved, config);

    let reloaded = repo.get_or_create(100).await?;
    assert_eq!(reloaded.prefix, "s!");
    assert_eq!(reloaded.starboard_channel_id, Some(200));
    assert_eq!(reloaded.star_threshold, 7);

    Ok(())
}

/// Tests disabling the starboard.
///
/// Verifies that clearing the channel stores NULL so the guild reads back as
/// disabled.
///
/// Expected: Ok with starboard_channel_id None
#[tokio::test]
async fn clears_starboard_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("300")
        .starboard_channel_id(Some("400".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let mut config = repo.get_or_create(300).await?;
    config.starboard_channel_id = None;
    repo.save(&config).await?;

    let reloaded = repo.get_or_create(300).await?;
    assert_eq!(reloaded.starboard_channel_id, None);

    Ok(())
}

/// Tests saving a config for a guild without a stored row.
///
/// Expected: Ok with the row inserted
#[tokio::test]
async fn inserts_missing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let mut config = GuildConfig::new(11);
    config.star_threshold = 2;

    repo.save(&config).await?;

    let reloaded = repo.find_by_guild_id(11).await?.unwrap();
    assert_eq!(reloaded.star_threshold, 2);

    Ok(())
}
