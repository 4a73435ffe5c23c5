use serenity::all::ChannelId;

use crate::{
    error::AppError,
    model::starboard::{star_reaction, ReactionEvent, StarboardOutcome},
    service::starboard::StarboardService,
};

impl<'a> StarboardService<'a> {
    /// Handles a reaction being added to a guild message.
    ///
    /// Guards run in order and each one ends processing:
    /// 1. Starboard disabled for the guild
    /// 2. Reaction is not a star
    /// 3. Self-star, star on the bot's own message, or star from a bot: the
    ///    reaction is removed
    ///
    /// Past the guards the reaction count is fetched fresh. A message with a repost
    /// always gets its repost refreshed with that count; a message without one is
    /// reposted once the count reaches the guild's threshold.
    ///
    /// # Arguments
    /// - `event` - The reaction that was added
    ///
    /// # Returns
    /// - `Ok(StarboardOutcome)` - The branch taken
    /// - `Err(AppError)` - Database error, or a Discord error other than a missing repost
    pub async fn on_reaction_added(
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

        let starboard = self
            .client
            .fetch_channel(ChannelId::new(starboard_channel_id))
            .await?;

        let message = self
            .client
            .fetch_message(event.channel_id, event.message_id)
            .await?;

        if event.user_id == message.author.id
            || message.author.id == self.bot_id
            || event.user_is_bot
        {
            tracing::debug!(
                "Removing star by {} on message {} by {}",
                event.user_id,
                message.id,
                message.author.id
            );
            self.client
                .remove_reaction(
                    event.channel_id,
                    event.message_id,
                    &event.emoji,
                    event.user_id,
                )
                .await?;
            return Ok(StarboardOutcome::SelfStarRemoved);
        }

        let stars = self
            .client
            .count_reactions(event.channel_id, event.message_id, &star_reaction())
            .await?;

        match self.starred.get(message.id.get()).await? {
            Some(record) => {
                self.refresh_repost(event.guild_id, starboard.id, &message, record, stars)
                    .await
            }
            None if stars >= config.star_threshold => {
                let repost = self
                    .send_repost(event.guild_id, starboard.id, &message, stars)
                    .await?;

                self.starred
                    .create(message.id.get(), repost.id.get(), stars)
                    .await?;

                tracing::info!(
                    "Reposted message {} with {} stars to starboard {}",
                    message.id,
                    stars,
                    starboard.id
                );

                Ok(StarboardOutcome::Reposted)
            }
            None => Ok(StarboardOutcome::BelowThreshold),
        }
    }
}
