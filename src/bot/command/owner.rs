//! Commands restricted to the bot owners.

use std::sync::atomic::{AtomicBool, Ordering};

use poise::CreateReply;

use crate::{bot::Context, error::AppError};

/// One-way switch that locks the owner commands until the process restarts.
#[derive(Default)]
pub struct PanicSwitch {
    engaged: AtomicBool,
}

impl PanicSwitch {
    /// Engages the switch.
    ///
    /// # Returns
    /// - `true` - The switch was released and is now engaged
    /// - `false` - The switch was already engaged
    pub fn engage(&self) -> bool {
        !self.engaged.swap(true, Ordering::SeqCst)
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::SeqCst)
    }
}

/// Command check failing once `panic` has been used.
async fn owner_commands_enabled(ctx: Context<'_>) -> Result<bool, AppError> {
    Ok(!ctx.data().panic.is_engaged())
}

/// Shut the bot down. A process supervisor is expected to restart it.
#[poise::command(
    prefix_command,
    owners_only,
    hide_in_help,
    aliases("restart", "rst"),
    check = "owner_commands_enabled"
)]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say("Ja, matane").await?;

    tracing::info!("Shutdown requested by {}", ctx.author().name);
    ctx.framework().shard_manager().shutdown_all().await;

    Ok(())
}

/// Lock the owner commands until the bot restarts
#[poise::command(
    prefix_command,
    owners_only,
    hide_in_help,
    aliases("p"),
    check = "owner_commands_enabled"
)]
pub async fn panic(ctx: Context<'_>) -> Result<(), AppError> {
    let reply = ctx.say("Panicking..").await?;

    if ctx.data().panic.engage() {
        tracing::warn!("Owner commands locked by {}", ctx.author().name);
    }

    reply
        .edit(ctx, CreateReply::default().content("Panicked"))
        .await?;

    Ok(())
}
