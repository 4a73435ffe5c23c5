//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for the bot's two records. They use
//! SeaORM entity models internally and return domain models, so entity types never
//! leak past this layer. Each repository also implements the store trait the
//! starboard engine consumes, allowing the engine to run against any store.

pub mod guild_config;
pub mod starred_message;

#[cfg(test)]
mod test;
