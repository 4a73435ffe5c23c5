//! Guild settings commands.

use serenity::all::ChannelId;

use crate::{
    bot::{command::require_guild_id, Context},
    data::guild_config::GuildConfigRepository,
    error::AppError,
    service::settings::SettingsService,
    util::parse::{resolve_id_from_arg, CHANNEL_MENTION},
};

/// Show or change this server's settings
#[poise::command(
    prefix_command,
    guild_only,
    subcommands("starboard", "setstarboard", "stars", "setstars", "setprefix")
)]
pub async fn settings(ctx: Context<'_>) -> Result<(), AppError> {
    poise::builtins::help(ctx, Some("settings"), Default::default()).await?;

    Ok(())
}

/// Show the starboard channel
#[poise::command(prefix_command, guild_only, owners_only, aliases("sb"))]
pub async fn starboard(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild_id(ctx)?;
    let repo = GuildConfigRepository::new(&ctx.data().db);
    let config = SettingsService::new(&repo).get(guild_id).await?;

    ctx.say(format!(
        "Starboard is currently set to {}.",
        channel_display(config.starboard_channel_id)
    ))
    .await?;

    Ok(())
}

/// Set the starboard channel, or disable the starboard when no channel is given
#[poise::command(prefix_command, guild_only, owners_only, aliases("ssb"))]
pub async fn setstarboard(
    ctx: Context<'_>,
    #[description = "Channel mention or id"] channel: Option<String>,
) -> Result<(), AppError> {
    let guild_id = require_guild_id(ctx)?;

    let channel_id = match channel {
        Some(arg) => Some(resolve_text_channel(ctx, guild_id, &arg).await?),
        None => None,
    };

    let repo = GuildConfigRepository::new(&ctx.data().db);
    let config = SettingsService::new(&repo)
        .set_starboard_channel(guild_id, channel_id)
        .await?;

    tracing::info!(
        "Starboard of guild {} set to {:?} by {}",
        guild_id,
        config.starboard_channel_id,
        ctx.author().name
    );

    ctx.say(format!(
        "Starboard successfully set to {}.",
        channel_display(config.starboard_channel_id)
    ))
    .await?;

    Ok(())
}

/// Show how many stars a message needs to reach the starboard
#[poise::command(prefix_command, guild_only, owners_only, aliases("s"))]
pub async fn stars(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild_id(ctx)?;
    let repo = GuildConfigRepository::new(&ctx.data().db);
    let config = SettingsService::new(&repo).get(guild_id).await?;

    ctx.say(format!(
        "{} is the amount of stars required for messages to be sent in starboard.",
        config.star_threshold
    ))
    .await?;

    Ok(())
}

/// Set how many stars a message needs to reach the starboard
#[poise::command(prefix_command, guild_only, owners_only, aliases("ss"))]
pub async fn setstars(
    ctx: Context<'_>,
    #[description = "Number of stars, 1 to 20"] stars: i64,
) -> Result<(), AppError> {
    let guild_id = require_guild_id(ctx)?;
    let repo = GuildConfigRepository::new(&ctx.data().db);
    let config = SettingsService::new(&repo)
        .set_star_threshold(guild_id, stars)
        .await?;

    let plural = if config.star_threshold > 1 { "s" } else { "" };
    ctx.say(format!(
        "{} star{} is the new amount of stars required for messages to be sent in starboard.",
        config.star_threshold, plural
    ))
    .await?;

    Ok(())
}

/// Set the command prefix for this server
#[poise::command(prefix_command, guild_only, owners_only, aliases("sp"))]
pub async fn setprefix(
    ctx: Context<'_>,
    #[description = "New prefix"] prefix: String,
) -> Result<(), AppError> {
    let guild_id = require_guild_id(ctx)?;
    let repo = GuildConfigRepository::new(&ctx.data().db);
    let config = SettingsService::new(&repo)
        .set_prefix(guild_id, &prefix)
        .await?;

    ctx.say(format!("Prefix successfully set to `{}`.", config.prefix))
        .await?;

    Ok(())
}

/// Renders a channel setting as a mention, or `None` when unset.
fn channel_display(channel_id: Option<u64>) -> String {
    match channel_id {
        Some(id) => format!("<#{}>", id),
        None => "None".to_string(),
    }
}

/// Resolves a channel argument to a text channel of the invoking guild.
///
/// # Returns
/// - `Ok(u64)` - Id of the channel
/// - `Err(AppError::BadRequest)` - The argument is not a channel of this guild
async fn resolve_text_channel(ctx: Context<'_>, guild_id: u64, arg: &str) -> Result<u64, AppError> {
    let not_a_channel =
        || AppError::BadRequest(format!("`{}` is not a channel in this server.", arg));

    let id = resolve_id_from_arg(arg, &CHANNEL_MENTION)
        .filter(|id| *id != 0)
        .ok_or_else(not_a_channel)?;

    let channel = ChannelId::new(id)
        .to_channel(ctx.serenity_context())
        .await
        .map_err(|_| not_a_channel())?;

    channel
        .guild()
        .filter(|channel| channel.guild_id.get() == guild_id && channel.is_text_based())
        .map(|channel| channel.id.get())
        .ok_or_else(not_a_channel)
}
