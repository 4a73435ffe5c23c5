//! Business logic layer.
//!
//! Services coordinate repositories and the Discord API. The starboard engine talks
//! to Discord only through the [`discord::ChatClient`] trait so it can be exercised
//! in tests without a gateway connection.

pub mod discord;
pub mod settings;
pub mod starboard;
pub mod thumbnail;
