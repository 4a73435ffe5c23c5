use crate::{
    data::guild_config::{GuildConfigRepository, GuildConfigStore},
    error::AppError,
    model::guild_config::{GuildConfig, DEFAULT_PREFIX, DEFAULT_STAR_THRESHOLD},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_or_create;
mod save;
