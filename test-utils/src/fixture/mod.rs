//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default
//! values used by the factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let config = fixture::guild_config::entity_builder()
//!     .starboard_channel_id(Some("111".to_string()))
//!     .build();
//! ```

pub mod guild_config;
pub mod starred_message;

pub use guild_config::{
    entity as guild_config_entity, entity_builder as guild_config_entity_builder,
};
pub use starred_message::{
    entity as starred_message_entity, entity_builder as starred_message_entity_builder,
};
