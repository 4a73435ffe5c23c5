use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarredMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(StarredMessage::Id))
                    .col(string(StarredMessage::OriginalMessageId))
                    .col(string(StarredMessage::RepostMessageId))
                    .col(big_integer(StarredMessage::StarCount))
                    .to_owned(),
            )
            .await?;

        // One repost per original message
        manager
            .create_index(
                Index::create()
                    .name("idx_starred_message_original_message_id")
                    .table(StarredMessage::Table)
                    .col(StarredMessage::OriginalMessageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_starred_message_original_message_id")
                    .table(StarredMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarredMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarredMessage {
    Table,
    Id,
    OriginalMessageId,
    RepostMessageId,
    StarCount,
}
