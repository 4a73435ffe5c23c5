//! Starred message factory for creating test repost records.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starred message records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::starred_message::StarredMessageFactory;
///
/// let starred = StarredMessageFactory::new(&db)
///     .original_message_id("1000")
///     .star_count(5)
///     .build()
///     .await?;
/// ```
pub struct StarredMessageFactory<'a> {
    db: &'a DatabaseConnection,
    original_message_id: String,
    repost_message_id: String,
    star_count: i64,
}

impl<'a> StarredMessageFactory<'a> {
    /// Creates a new StarredMessageFactory with default values.
    ///
    /// Defaults:
    /// - original_message_id, repost_message_id: unique auto-incremented snowflakes
    /// - star_count: `3`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            original_message_id: next_id().to_string(),
            repost_message_id: next_id().to_string(),
            star_count: fixture::starred_message::entity().star_count,
        }
    }

    pub fn original_message_id(mut self, id: impl Into<String>) -> Self {
        self.original_message_id = id.into();
        self
    }

    pub fn repost_message_id(mut self, id: impl Into<String>) -> Self {
        self.repost_message_id = id.into();
        self
    }

    pub fn star_count(mut self, count: i64) -> Self {
        self.star_count = count;
        self
    }

    /// Builds and inserts the starred message into the database.
    ///
    /// # Returns
    /// - `Ok(entity::starred_message::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::starred_message::Model, DbErr> {
        entity::starred_message::ActiveModel {
            id: ActiveValue::NotSet,
            original_message_id: ActiveValue::Set(self.original_message_id),
            repost_message_id: ActiveValue::Set(self.repost_message_id),
            star_count: ActiveValue::Set(self.star_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starred message record with default values.
pub async fn create_starred_message(
    db: &DatabaseConnection,
) -> Result<entity::starred_message::Model, DbErr> {
    StarredMessageFactory::new(db).build().await
}
