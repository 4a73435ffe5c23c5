//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return for the message and channel fetches made by the
//! starboard engine.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_message};
//!
//! let channel = create_test_channel(500, 1, "general");
//! let message = create_test_message(700, 500, 42, "hello");
//! ```

pub mod channel;
pub mod message;

pub use channel::create_test_channel;
pub use message::{create_test_message, TestMessageBuilder};
