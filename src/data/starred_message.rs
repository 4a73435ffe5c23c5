//! Starred message repository for database operations.
//!
//! Tracks which original messages have a repost in their guild's starboard channel,
//! together with the star count last written to that repost.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::starred_message::StarredMessage};

/// Persistence for starboard repost tracking.
#[async_trait]
pub trait StarredMessageStore: Send + Sync {
    /// Returns the record for an original message, if it was ever reposted.
    async fn get(&self, original_message_id: u64) -> Result<Option<StarredMessage>, AppError>;

    /// Records a new repost.
    async fn create(
        &self,
        original_message_id: u64,
        repost_message_id: u64,
        star_count: u64,
    ) -> Result<StarredMessage, AppError>;

    /// Updates an existing record in place.
    async fn save(&self, starred: &StarredMessage) -> Result<StarredMessage, AppError>;

    /// Removes the record for an original message. Missing records are ignored.
    async fn delete(&self, original_message_id: u64) -> Result<(), AppError>;
}

/// Repository providing database operations for starred messages.
pub struct StarredMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarredMessageRepository<'a> {
    /// Creates a new StarredMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StarredMessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(
        &self,
        original_message_id: u64,
    ) -> Result<Option<entity::starred_message::Model>, AppError> {
        let entity = entity::prelude::StarredMessage::find()
            .filter(
                entity::starred_message::Column::OriginalMessageId
                    .eq(original_message_id.to_string()),
            )
            .one(self.db)
            .await?;

        Ok(entity)
    }
}

#[async_trait]
impl StarredMessageStore for StarredMessageRepository<'_> {
    /// Gets the starred message record for an original message.
    ///
    /// # Arguments
    /// - `original_message_id` - Discord ID of the starred message
    ///
    /// # Returns
    /// - `Ok(Some(StarredMessage))` - The message has a repost on record
    /// - `Ok(None)` - The message was never reposted
    /// - `Err(AppError)` - Database error or corrupted stored id
    async fn get(&self, original_message_id: u64) -> Result<Option<StarredMessage>, AppError> {
        self.find_entity(original_message_id)
            .await?
            .map(StarredMessage::from_entity)
            .transpose()
    }

    /// Creates a starred message record.
    ///
    /// The unique index on `original_message_id` rejects a second record for the
    /// same original message with a database error.
    ///
    /// # Arguments
    /// - `original_message_id` - Discord ID of the starred message
    /// - `repost_message_id` - Discord ID of the bot's repost
    /// - `star_count` - Star count shown on the repost
    ///
    /// # Returns
    /// - `Ok(StarredMessage)` - The created record
    /// - `Err(AppError::DbErr)` - Database error, including duplicate records
    async fn create(
        &self,
        original_message_id: u64,
        repost_message_id: u64,
        star_count: u64,
    ) -> Result<StarredMessage, AppError> {
        let entity = entity::starred_message::ActiveModel {
            id: ActiveValue::NotSet,
            original_message_id: ActiveValue::Set(original_message_id.to_string()),
            repost_message_id: ActiveValue::Set(repost_message_id.to_string()),
            star_count: ActiveValue::Set(star_count as i64),
        }
        .insert(self.db)
        .await?;

        StarredMessage::from_entity(entity)
    }

    /// Updates the repost id and star count of an existing record.
    ///
    /// # Arguments
    /// - `starred` - Record with the new values, keyed by `original_message_id`
    ///
    /// # Returns
    /// - `Ok(StarredMessage)` - The updated record
    /// - `Err(AppError::NotFound)` - No record exists for the original message
    /// - `Err(AppError::DbErr)` - Database error
    async fn save(&self, starred: &StarredMessage) -> Result<StarredMessage, AppError> {
        let existing = self
            .find_entity(starred.original_message_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Starred message {} not found",
                    starred.original_message_id
                ))
            })?;

        let mut active: entity::starred_message::ActiveModel = existing.into();
        active.repost_message_id = ActiveValue::Set(starred.repost_message_id.to_string());
        active.star_count = ActiveValue::Set(starred.star_count as i64);

        let entity = active.update(self.db).await?;

        StarredMessage::from_entity(entity)
    }

    /// Deletes the record for an original message.
    ///
    /// # Arguments
    /// - `original_message_id` - Discord ID of the starred message
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted, or there was nothing to delete
    /// - `Err(AppError::DbErr)` - Database error
    async fn delete(&self, original_message_id: u64) -> Result<(), AppError> {
        entity::prelude::StarredMessage::delete_many()
            .filter(
                entity::starred_message::Column::OriginalMessageId
                    .eq(original_message_id.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
