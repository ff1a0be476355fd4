//! Replies to confessions and to other replies.

use crate::server::{
    data::{confession_map::ConfessionMapRepository, guild_counter::GuildCounterRepository},
    error::AppError,
    model::{
        confession::{ConfessionKind, SaveConfessionParam},
        platform::{ControlSet, SendTarget},
        submission::{ConfessionReceipt, ReplyRequest},
    },
    service::platform::ChatPlatform,
};

use super::{artifact, artifact::LogEntry, ConfessionService};

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Posts an anonymous reply.
    ///
    /// A reply to an original confession goes into that confession's thread, created on
    /// the first reply. A reply to a reply is posted as a direct reply to it, so threads
    /// are only ever rooted at originals. The target is resolved before an index is
    /// allocated; unresolvable targets write nothing.
    ///
    /// # Arguments
    /// - `request` - Reply content, attachment, target reference and invoking context
    ///
    /// # Returns
    /// - `Ok(ConfessionReceipt)` - Index and location of the posted reply
    /// - `Err(AppError::ConfessionErr(_))` - Target could not be resolved or its thread
    ///   could not be found or created
    /// - `Err(AppError::PlatformErr)` - The reply could not be posted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reply(&self, request: ReplyRequest) -> Result<ConfessionReceipt, AppError> {
        let target = self
            .resolve_target(request.guild_id, request.reference, request.context)
            .await?;

        let send_target = match target.kind {
            ConfessionKind::Reply => SendTarget::ReplyTo(target.location),
            ConfessionKind::Original => {
                SendTarget::Channel(self.reply_thread(request.guild_id, &target).await?)
            }
        };

        let index = GuildCounterRepository::new(self.db)
            .allocate_next(request.guild_id)
            .await?;

        let embed = artifact::reply_embed(index, &request.content, request.attachment_url.clone());
        let location = self
            .platform
            .send_message(send_target, embed, Some(ControlSet::ReplyOnly))
            .await?;

        tracing::info!(
            guild_id = request.guild_id,
            index,
            target_index = target.index,
            message_id = location.message_id,
            "Posted reply"
        );

        ConfessionMapRepository::new(self.db)
            .save(SaveConfessionParam {
                guild_id: request.guild_id,
                index,
                channel_id: location.channel_id,
                message_id: location.message_id,
                kind: ConfessionKind::Reply,
                content: request.content.clone(),
            })
            .await?;

        self.mirror_to_log(
            request.guild_id,
            &LogEntry::Reply {
                submitter: &request.submitter,
                index,
                content: &request.content,
                attachment_url: request.attachment_url.as_deref(),
                target_index: target.index,
                target_content: target.content.as_deref(),
            },
        )
        .await;

        Ok(ConfessionReceipt { index, location })
    }
}
