//! Prefix commands.
//!
//! Commands are parsed by poise with a per-guild prefix read from the guild's
//! settings. Mentioning the bot always works as a prefix, and command names are
//! matched case-insensitively.

use poise::{FrameworkError, FrameworkOptions, PartialContext, PrefixFrameworkOptions};

use crate::{
    bot::{Context, Data},
    data::guild_config::{GuildConfigRepository, GuildConfigStore},
    error::AppError,
    model::guild_config::DEFAULT_PREFIX,
};

pub mod fun;
pub mod info;
pub mod owner;
pub mod settings;

/// All commands registered with the framework.
pub fn list() -> Vec<poise::Command<Data, AppError>> {
    vec![
        settings::settings(),
        info::info(),
        fun::thumbnail(),
        owner::shutdown(),
        owner::panic(),
        help(),
    ]
}

/// Framework options shared by all commands.
pub fn framework_options() -> FrameworkOptions<Data, AppError> {
    FrameworkOptions {
        commands: list(),
        prefix_options: PrefixFrameworkOptions {
            dynamic_prefix: Some(|ctx| Box::pin(dynamic_prefix(ctx))),
            mention_as_prefix: true,
            case_insensitive_commands: true,
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                tracing::info!(
                    "Started '{}' command from {}",
                    ctx.command().qualified_name,
                    ctx.author().name
                );
            })
        },
        post_command: |ctx| {
            Box::pin(async move {
                tracing::debug!(
                    "Finished '{}' command from {}",
                    ctx.command().qualified_name,
                    ctx.author().name
                );
            })
        },
        ..Default::default()
    }
}

/// Resolves the command prefix for the guild a message was sent in.
///
/// Direct messages use the default prefix.
async fn dynamic_prefix(
    ctx: PartialContext<'_, Data, AppError>,
) -> Result<Option<String>, AppError> {
    let Some(guild_id) = ctx.guild_id else {
        return Ok(Some(DEFAULT_PREFIX.to_string()));
    };

    let repo = GuildConfigRepository::new(&ctx.data.db);
    let config = repo.get_or_create(guild_id.get()).await?;

    Ok(Some(config.prefix))
}

/// Reports command errors.
///
/// `BadRequest` messages are meant for the user and are replied as-is. Other
/// command errors are logged and answered with a generic reply. Framework errors
/// such as argument parsing and failed checks use poise's default handling.
async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            let reply = match &error {
                AppError::BadRequest(message) => message.clone(),
                _ => {
                    tracing::error!(
                        "Command '{}' from {} failed: {:?}",
                        ctx.command().qualified_name,
                        ctx.author().name,
                        error
                    );
                    "Something went wrong while running that command.".to_string()
                }
            };

            if let Err(e) = ctx.say(reply).await {
                tracing::error!("Failed to send error reply: {:?}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {:?}", e);
            }
        }
    }
}

/// Show help for all commands or a single one
#[poise::command(prefix_command, track_edits)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to show help for"]
    #[rest]
    command: Option<String>,
) -> Result<(), AppError> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            extra_text_at_bottom: "Star a message with ⭐ to send it to the starboard.",
            ..Default::default()
        },
    )
    .await?;

    Ok(())
}

/// Returns the id of the guild a command was invoked in.
///
/// Commands using this are declared `guild_only`, so the error is only reachable if
/// that attribute is missing.
pub(crate) fn require_guild_id(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|guild_id| guild_id.get())
        .ok_or_else(|| {
            AppError::BadRequest("This command can only be used in a server.".to_string())
        })
}
