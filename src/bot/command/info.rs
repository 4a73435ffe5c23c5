//! Information commands.

use chrono::Utc;
use serenity::all::{CreateEmbed, Timestamp};

use crate::{bot::Context, error::AppError, util::time::display_time_from_datetimes};

/// Embed colour of info replies (blue).
const INFO_COLOUR: u32 = 0x3498DB;

/// Libraries shown by `info bot`, matching the versions required in Cargo.toml.
const LIBRARY_VERSIONS: [(&str, &str); 4] = [
    ("Serenity Version", "0.12.4"),
    ("Poise Version", "0.6.1"),
    ("SeaORM Version", "2.0.0-rc.11"),
    ("Tokio Version", "1.48.0"),
];

/// Show information about the bot
#[poise::command(prefix_command, subcommands("bot"))]
pub async fn info(ctx: Context<'_>) -> Result<(), AppError> {
    poise::builtins::help(ctx, Some("info"), Default::default()).await?;

    Ok(())
}

/// Show versions and uptime of the bot
#[poise::command(prefix_command)]
pub async fn bot(ctx: Context<'_>) -> Result<(), AppError> {
    let uptime = display_time_from_datetimes(Utc::now(), ctx.data().started_at, 4)?;
    let embed = bot_info_embed(&uptime, ctx.cache().guild_count());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Builds the `info bot` embed.
///
/// # Arguments
/// - `uptime` - Rendered uptime, empty right after startup
/// - `guild_count` - Number of guilds the bot is in
fn bot_info_embed(uptime: &str, guild_count: usize) -> CreateEmbed {
    let uptime = if uptime.is_empty() {
        "just now"
    } else {
        uptime
    };

    let mut embed = CreateEmbed::new()
        .colour(INFO_COLOUR)
        .description(
            "A starboard bot made using [Serenity](https://github.com/serenity-rs/serenity) \
             and [poise](https://github.com/serenity-rs/poise)\n\
             [Serenity Docs](https://docs.rs/serenity)\n\
             [poise Docs](https://docs.rs/poise)\n\
             [SeaORM Docs](https://docs.rs/sea-orm)",
        )
        .timestamp(Timestamp::now())
        .field(
            format!("{} Version", env!("CARGO_PKG_NAME")),
            env!("CARGO_PKG_VERSION"),
            false,
        );

    for (name, version) in LIBRARY_VERSIONS {
        embed = embed.field(name, version, false);
    }

    embed
        .field("Guilds", guild_count.to_string(), false)
        .field("Uptime", uptime, false)
}
