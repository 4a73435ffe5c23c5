use super::*;

/// Tests looking up a guild that was never observed.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(1).await?;

    assert!(result.is_none());

    let rows = entity::prelude::GuildConfig::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests looking up a stored guild.
///
/// Expected: Ok(Some) with the stored values
#[tokio::test]
async fn returns_stored_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guild_config::create_guild_config(db).await?;
    let guild_id: u64 = stored.guild_id.parse().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(guild_id).await?.unwrap();

    assert_eq!(config.guild_id, guild_id);
    assert_eq!(config.prefix, stored.prefix);

    Ok(())
}
