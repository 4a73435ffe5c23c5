use crate::{
    data::starred_message::{StarredMessageRepository, StarredMessageStore},
    error::AppError,
    model::starred_message::StarredMessage,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod save;
