use sea_orm_migration::{prelude::*, schema::*};

/// Command prefix assigned to guilds that never configured one.
const DEFAULT_PREFIX: &str = "y.";

/// Stars required before a message is reposted, unless a guild overrides it.
const DEFAULT_STAR_THRESHOLD: i32 = 3;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string(GuildConfig::Prefix).default(DEFAULT_PREFIX))
                    .col(string_null(GuildConfig::StarboardChannelId))
                    .col(integer(GuildConfig::StarThreshold).default(DEFAULT_STAR_THRESHOLD))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    Prefix,
    StarboardChannelId,
    StarThreshold,
}
