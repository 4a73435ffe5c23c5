//! Factory methods for creating test data.
//!
//! Each record type has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation. Factories insert into the
//! database; use [`crate::fixture`] for in-memory models.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(&db).await?;
//!
//! let starred = factory::starred_message::StarredMessageFactory::new(&db)
//!     .star_count(10)
//!     .build()
//!     .await?;
//! ```

pub mod guild_config;
pub mod helpers;
pub mod starred_message;

pub use guild_config::create_guild_config;
pub use starred_message::create_starred_message;
