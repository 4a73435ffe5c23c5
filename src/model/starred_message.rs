//! Tracking record for messages reposted to a starboard.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Link between an original message and its repost in the starboard channel.
///
/// At most one record exists per original message. The record is removed only when
/// the repost turns out to no longer exist on Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct StarredMessage {
    /// Discord ID of the message that received the stars.
    pub original_message_id: u64,
    /// Discord ID of the bot's repost in the starboard channel.
    pub repost_message_id: u64,
    /// Star count shown on the repost the last time it was written.
    pub star_count: u64,
}

impl StarredMessage {
    /// Converts an entity model to a starred message domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(StarredMessage)` - The converted starred message
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored id is not a valid u64
    pub fn from_entity(entity: entity::starred_message::Model) -> Result<Self, AppError> {
        Ok(Self {
            original_message_id: parse_u64_from_string(entity.original_message_id)?,
            repost_message_id: parse_u64_from_string(entity.repost_message_id)?,
            star_count: entity.star_count.max(0) as u64,
        })
    }
}
