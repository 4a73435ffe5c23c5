use poise::CreateReply;
use serenity::all::CreateAttachment;

use crate::{
    bot::Context,
    error::AppError,
    service::thumbnail::{get_video_id, ThumbnailService},
};

/// Post the thumbnail of a YouTube video
#[poise::command(prefix_command)]
pub async fn thumbnail(
    ctx: Context<'_>,
    #[description = "Video url or id"] query: String,
) -> Result<(), AppError> {
    let video_id = get_video_id(&query);
    let service = ThumbnailService::new(&ctx.data().http_client);

    let reply = match service.fetch(video_id).await? {
        Some(image) => CreateReply::default()
            .attachment(CreateAttachment::bytes(image, format!("{video_id}.jpg"))),
        None => CreateReply::default().content("Invalid Youtube video."),
    };

    ctx.send(reply.reply(true)).await?;

    Ok(())
}
