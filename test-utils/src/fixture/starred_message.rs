//! Starred message fixtures for creating in-memory test data.

use entity::starred_message;

/// Default original message ID.
pub const DEFAULT_ORIGINAL_MESSAGE_ID: &str = "111111111";

/// Default repost message ID.
pub const DEFAULT_REPOST_MESSAGE_ID: &str = "222222222";

/// Default star count.
pub const DEFAULT_STAR_COUNT: i64 = 3;

/// Creates a starred message entity model with default values.
pub fn entity() -> starred_message::Model {
    starred_message::Model {
        id: 1,
        original_message_id: DEFAULT_ORIGINAL_MESSAGE_ID.to_string(),
        repost_message_id: DEFAULT_REPOST_MESSAGE_ID.to_string(),
        star_count: DEFAULT_STAR_COUNT,
    }
}

/// Creates a starred message entity builder for customization.
pub fn entity_builder() -> StarredMessageEntityBuilder {
    StarredMessageEntityBuilder { entity: entity() }
}

/// Builder for customizing starred message entity fixtures.
pub struct StarredMessageEntityBuilder {
    entity: starred_message::Model,
}

impl StarredMessageEntityBuilder {
    pub fn original_message_id(mut self, id: impl Into<String>) -> Self {
        self.entity.original_message_id = id.into();
        self
    }

    pub fn repost_message_id(mut self, id: impl Into<String>) -> Self {
        self.entity.repost_message_id = id.into();
        self
    }

    pub fn star_count(mut self, count: i64) -> Self {
        self.entity.star_count = count;
        self
    }

    pub fn build(self) -> starred_message::Model {
        self.entity
    }
}
