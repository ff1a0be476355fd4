//! Reply target resolution and reply thread reuse.

use crate::server::{
    data::confession_map::ConfessionMapRepository,
    error::{confession::ConfessionError, platform::PlatformError, AppError},
    model::{
        confession::{ConfessionEntry, ConfessionKind},
        platform::{FetchedMessage, MessageLocation},
        submission::{ReplyContext, ReplyReference, ResolvedTarget},
    },
    service::platform::ChatPlatform,
};

use super::{artifact, ConfessionService};

/// Archived threads searched when an existing reply thread has to be found.
pub const ARCHIVED_THREAD_SCAN_LIMIT: u64 = 100;

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Locates the message a reply is aimed at.
    ///
    /// The confession map is the source of the target's index, kind and content. The
    /// rendered embed is parsed only for messages the map has no row for, or rows stored
    /// before content was recorded.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the reply is submitted in
    /// - `reference` - Parsed target field of the reply form
    /// - `context` - Message the reply control was attached to and the invoking thread
    ///
    /// # Returns
    /// - `Ok(ResolvedTarget)` - Target location, index, kind, content and thread
    /// - `Err(AppError::ConfessionErr(IndexNotFound))` - Unknown index
    /// - `Err(AppError::ConfessionErr(MessageNotFound))` - Target message does not exist
    /// - `Err(AppError::ConfessionErr(NotConfigured))` - Message lookup without a
    ///   configured confession channel
    /// - `Err(AppError::ConfessionErr(MissingTarget))` - Blank reference with no message
    ///   to fall back on
    /// - `Err(AppError::ConfessionErr(MalformedTarget))` - Target is not a confession
    pub async fn resolve_target(
        &self,
        guild_id: u64,
        reference: ReplyReference,
        context: ReplyContext,
    ) -> Result<ResolvedTarget, AppError> {
        let map_repo = ConfessionMapRepository::new(self.db);

        match reference {
            ReplyReference::Index(index) => {
                let entry = map_repo
                    .find_by_index(guild_id, index)
                    .await?
                    .ok_or(ConfessionError::IndexNotFound(index))?;
                let entry = ConfessionEntry::from_entity(entry)?;

                let location = MessageLocation::new(entry.channel_id, entry.message_id);
                let message = self
                    .platform
                    .fetch_message(location)
                    .await?
                    .ok_or(ConfessionError::MessageNotFound(entry.message_id))?;

                tracing::debug!(guild_id, index, "Resolved reply target by index");
                Ok(Self::target_from_entry(entry, &message))
            }
            ReplyReference::Message(message_id) => {
                let config = self.guild_config(guild_id).await?;

                let message = match map_repo.find_by_message_id(guild_id, message_id).await? {
                    Some(entry) => {
                        let entry = ConfessionEntry::from_entity(entry)?;
                        let location = MessageLocation::new(entry.channel_id, entry.message_id);
                        self.platform.fetch_message(location).await?
                    }
                    None => {
                        self.find_in_channel(guild_id, config.channel_id, message_id)
                            .await?
                    }
                }
                .ok_or(ConfessionError::MessageNotFound(message_id))?;

                tracing::debug!(guild_id, message_id, "Resolved reply target by message");
                self.target_from_message(guild_id, message).await
            }
            ReplyReference::Attached => {
                // Inside a thread the target is the confession the thread was started from
                let location = match (context.thread, context.attached_message) {
                    (Some(thread), _) => thread.starter_message(),
                    (None, Some(attached)) => attached,
                    (None, None) => return Err(ConfessionError::MissingTarget.into()),
                };

                let message = self
                    .platform
                    .fetch_message(location)
                    .await?
                    .ok_or(ConfessionError::MessageNotFound(location.message_id))?;

                tracing::debug!(
                    guild_id,
                    message_id = location.message_id,
                    "Resolved reply target from context"
                );
                self.target_from_message(guild_id, message).await
            }
        }
    }

    /// Fetches a message from the confession channel, then from its active threads.
    async fn find_in_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Option<FetchedMessage>, AppError> {
        if let Some(message) = self
            .platform
            .fetch_message(MessageLocation::new(channel_id, message_id))
            .await?
        {
            return Ok(Some(message));
        }

        for thread in self.platform.active_threads(guild_id, channel_id).await? {
            if let Some(message) = self
                .platform
                .fetch_message(MessageLocation::new(thread.thread_id, message_id))
                .await?
            {
                return Ok(Some(message));
            }
        }

        Ok(None)
    }

    /// Builds the target of a fetched message, preferring its confession map row.
    async fn target_from_message(
        &self,
        guild_id: u64,
        message: FetchedMessage,
    ) -> Result<ResolvedTarget, AppError> {
        let map_repo = ConfessionMapRepository::new(self.db);

        if let Some(entry) = map_repo
            .find_by_message_id(guild_id, message.location.message_id)
            .await?
        {
            let entry = ConfessionEntry::from_entity(entry)?;
            return Ok(Self::target_from_entry(entry, &message));
        }

        let index = artifact::legacy_index(&message)
            .ok_or(ConfessionError::MalformedTarget(message.location.message_id))?;
        let content = artifact::legacy_content(&message)
            .ok_or(ConfessionError::MalformedTarget(message.location.message_id))?;

        let kind = match map_repo.find_by_index(guild_id, index).await? {
            Some(entry) => ConfessionKind::from_stored(entry.kind.as_deref()),
            None => ConfessionKind::Original,
        };

        Ok(ResolvedTarget {
            location: message.location,
            index,
            content: Some(content),
            kind,
            thread_id: message.thread_id,
        })
    }

    fn target_from_entry(entry: ConfessionEntry, message: &FetchedMessage) -> ResolvedTarget {
        let content = entry
            .content
            .or_else(|| artifact::legacy_content(message));

        ResolvedTarget {
            location: message.location,
            index: entry.index,
            content,
            kind: entry.kind,
            thread_id: message.thread_id,
        }
    }

    /// Finds or creates the reply thread of an original confession.
    ///
    /// Reuses the thread already attached to the message. Otherwise a thread is created;
    /// if the platform reports one already exists, the active threads and then the most
    /// recent archived threads of the channel are searched for it.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the thread replies are posted into
    /// - `Err(AppError::ConfessionErr(ThreadUnavailable))` - No thread found or created
    pub async fn reply_thread(
        &self,
        guild_id: u64,
        target: &ResolvedTarget,
    ) -> Result<u64, AppError> {
        if let Some(thread_id) = target.thread_id {
            return Ok(thread_id);
        }

        let location = target.location;
        match self
            .platform
            .create_thread(location, &artifact::thread_name(target.index))
            .await
        {
            Ok(thread_id) => {
                tracing::info!(
                    guild_id,
                    index = target.index,
                    thread_id,
                    "Created reply thread"
                );
                Ok(thread_id)
            }
            Err(PlatformError::ThreadAlreadyExists) => {
                match self.find_existing_thread(guild_id, location).await {
                    Some(thread_id) => Ok(thread_id),
                    None => Err(ConfessionError::ThreadUnavailable(target.index).into()),
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to create reply thread for confession #{}: {}",
                    target.index,
                    e
                );
                Err(ConfessionError::ThreadUnavailable(target.index).into())
            }
        }
    }

    async fn find_existing_thread(&self, guild_id: u64, starter: MessageLocation) -> Option<u64> {
        let started_here = |starter_message_id: Option<u64>| {
            starter_message_id == Some(starter.message_id)
        };

        match self
            .platform
            .active_threads(guild_id, starter.channel_id)
            .await
        {
            Ok(threads) => {
                if let Some(thread) = threads
                    .into_iter()
                    .find(|thread| started_here(thread.starter_message_id))
                {
                    return Some(thread.thread_id);
                }
            }
            Err(e) => tracing::warn!(
                "Failed to list active threads of channel {}: {}",
                starter.channel_id,
                e
            ),
        }

        match self
            .platform
            .archived_threads(starter.channel_id, ARCHIVED_THREAD_SCAN_LIMIT)
            .await
        {
            Ok(threads) => threads
                .into_iter()
                .find(|thread| started_here(thread.starter_message_id))
                .map(|thread| thread.thread_id),
            Err(e) => {
                tracing::warn!(
                    "Failed to search archived threads of channel {}: {}",
                    starter.channel_id,
                    e
                );
                None
            }
        }
    }
}
