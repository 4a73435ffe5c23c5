//! Starboard Test Utils
//!
//! Provides shared testing utilities for the starboard bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories and
//! fixtures for the bot's database records, and factories for the Serenity objects the
//! starboard engine consumes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert records with sensible defaults
//! - **fixture**: Build in-memory entity models without touching the database
//! - **serenity**: Build Serenity `Message` and `GuildChannel` values from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_config_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_starboard_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
