//! Domain models used by the data and service layers.
//!
//! Repositories convert SeaORM entity models into these plain structs at the data
//! layer boundary, so nothing above the data layer depends on `entity` directly.

pub mod guild_config;
pub mod starboard;
pub mod starred_message;
