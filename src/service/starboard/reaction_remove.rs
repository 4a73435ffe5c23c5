use serenity::all::ChannelId;

use crate::{
    error::AppError,
    model::starboard::{star_reaction, ReactionEvent, StarboardOutcome},
    service::starboard::StarboardService,
};

impl<'a> StarboardService<'a> {
    /// Handles a reaction being removed from a guild message.
    ///
    /// The stored count acts as a floor: the repost is refreshed only when the fresh
    /// count is strictly greater than the count last written, so a removal never
    /// lowers what the starboard shows.
    ///
    /// # Arguments
    /// - `event` - The reaction that was removed
    ///
    /// # Returns
    /// - `Ok(StarboardOutcome)` - The branch taken
    /// - `Err(AppError)` - Database error, or a Discord error other than a missing repost
    pub async fn on_reaction_removed(
        &self,
        event: &ReactionEvent,
    ) -> Result<StarboardOutcome, AppError> {
        let config = self.guilds.get_or_create(event.guild_id.get()).await?;
        let Some(starboard_channel_id) = config.starboard_channel_id else {
            return Ok(StarboardOutcome::Disabled);
        };

        if !event.is_star() {
            return Ok(StarboardOutcome::NotAStar);
        }

        let message = self
            .client
            .fetch_message(event.channel_id, event.message_id)
            .await?;

        if event.user_id == message.author.id {
            return Ok(StarboardOutcome::AuthorIgnored);
        }

        let stars = self
            .client
            .count_reactions(event.channel_id, event.message_id, &star_reaction())
            .await?;

        let Some(record) = self.starred.get(message.id.get()).await? else {
            return Ok(StarboardOutcome::NotStarred);
        };

        if stars <= record.star_count {
            tracing::debug!(
                "Keeping message {} at {} stars (counted {})",
                message.id,
                record.star_count,
                stars
            );
            return Ok(StarboardOutcome::Unchanged);
        }

        let starboard = self
            .client
            .fetch_channel(ChannelId::new(starboard_channel_id))
            .await?;

        self.refresh_repost(event.guild_id, starboard.id, &message, record, stars)
            .await
    }
}
