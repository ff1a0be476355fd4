//! New top-level confessions.

use crate::server::{
    data::{confession_map::ConfessionMapRepository, guild_counter::GuildCounterRepository},
    error::{confession::ConfessionError, AppError},
    model::{
        confession::{ConfessionKind, SaveConfessionParam},
        platform::{ControlSet, SendTarget},
        submission::{ConfessionReceipt, ConfessionRequest},
    },
    service::platform::ChatPlatform,
};

use super::{artifact, artifact::LogEntry, ConfessionService};

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Posts a new anonymous confession to the guild's confession channel.
    ///
    /// The configuration is checked before an index is allocated, so rejected
    /// submissions never consume a number. The new post carries the submit + reply
    /// controls, which are then removed from the previously live post.
    ///
    /// # Arguments
    /// - `request` - Content, optional attachment and optional requested channel
    ///
    /// # Returns
    /// - `Ok(ConfessionReceipt)` - Index and location of the posted confession
    /// - `Err(AppError::ConfessionErr(NotConfigured))` - No confession channel set
    /// - `Err(AppError::ConfessionErr(ChannelNotAllowed))` - Requested channel is not
    ///   the configured one
    /// - `Err(AppError::PlatformErr)` - The confession could not be posted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(&self, request: ConfessionRequest) -> Result<ConfessionReceipt, AppError> {
        let config = self.guild_config(request.guild_id).await?;

        if let Some(requested) = request.requested_channel_id {
            if requested != config.channel_id {
                return Err(ConfessionError::ChannelNotAllowed {
                    requested,
                    configured: config.channel_id,
                }
                .into());
            }
        }

        let index = GuildCounterRepository::new(self.db)
            .allocate_next(request.guild_id)
            .await?;

        let embed =
            artifact::confession_embed(index, &request.content, request.attachment_url.clone());
        let location = self
            .platform
            .send_message(
                SendTarget::Channel(config.channel_id),
                embed,
                Some(ControlSet::SubmitAndReply),
            )
            .await?;

        tracing::info!(
            guild_id = request.guild_id,
            index,
            message_id = location.message_id,
            "Posted confession"
        );

        self.retire_live_controls(request.guild_id, location).await;

        ConfessionMapRepository::new(self.db)
            .save(SaveConfessionParam {
                guild_id: request.guild_id,
                index,
                channel_id: location.channel_id,
                message_id: location.message_id,
                kind: ConfessionKind::Original,
                content: request.content.clone(),
            })
            .await?;

        self.mirror_to_log(
            request.guild_id,
            &LogEntry::Confession {
                submitter: &request.submitter,
                index,
                content: &request.content,
                attachment_url: request.attachment_url.as_deref(),
            },
        )
        .await;

        Ok(ConfessionReceipt { index, location })
    }
}
