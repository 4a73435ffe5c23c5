//! Discord bot integration.
//!
//! The bot runs a single Serenity client carrying two layers:
//! - a poise framework for the prefix commands (`command`)
//! - a raw event handler for gateway events (`handler`), which drives the
//!   starboard engine from reaction events
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to create default guild settings
//! - `GUILD_MESSAGES` - Prefix commands in guild channels
//! - `GUILD_MESSAGE_REACTIONS` - Reaction add and remove events
//! - `MESSAGE_CONTENT` - Command parsing and the text body of reposts
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the
//! Discord Developer Portal for the bot application.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{bot::command::owner::PanicSwitch, error::AppError};

pub mod command;
pub mod handler;
pub mod start;

/// Data shared with every command invocation.
pub struct Data {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    /// When the process started, for the uptime shown by `info bot`.
    pub started_at: DateTime<Utc>,
    /// Engaged by `panic` to lock the owner commands until restart.
    pub panic: PanicSwitch,
}

impl Data {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            db,
            http_client,
            started_at,
            panic: PanicSwitch::default(),
        }
    }
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;
