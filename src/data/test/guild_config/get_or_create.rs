use super::*;

/// Tests creating a config for a guild seen for the first time.
///
/// Verifies that the repository inserts a row with the default prefix, no
/// starboard channel and the default threshold.
///
/// Expected: Ok with default config
#[tokio::test]
async fn creates_default_config_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create(123456789).await?;

    assert_eq!(config.guild_id, 123456789);
    assert_eq!(config.prefix, DEFAULT_PREFIX);
    assert_eq!(config.starboard_channel_id, None);
    assert_eq!(config.star_threshold, DEFAULT_STAR_THRESHOLD);

    let rows = entity::prelude::GuildConfig::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests fetching a config that already exists.
///
/// Verifies that stored settings are returned unchanged instead of being
/// overwritten with defaults.
///
/// Expected: Ok with stored config
#[tokio::test]
async fn returns_existing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("555")
        .prefix("!")
        .starboard_channel_id(Some("777".to_string()))
        .star_threshold(5)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create(555).await?;

    assert_eq!(config.prefix, "!");
    assert_eq!(config.starboard_channel_id, Some(777));
    assert_eq!(config.star_threshold, 5);

    Ok(())
}

/// Tests repeated calls for the same guild.
///
/// Verifies that calling get_or_create twice keeps exactly one row per guild.
///
/// Expected: Ok with a single stored row
#[tokio::test]
async fn does_not_duplicate_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let first = repo.get_or_create(42).await?;
    let second = repo.get_or_create(42).await?;

    assert_eq!(first, second);

    let rows = entity::prelude::GuildConfig::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests reading a config whose stored channel id is not a number.
///
/// Verifies that corrupted ids surface as an internal error rather than being
/// silently treated as "no channel".
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupted_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("999")
        .starboard_channel_id(Some("not-a-number".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.get_or_create(999).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
