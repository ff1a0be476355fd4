//! Retiring submit controls from the previously live confession.
//!
//! Only the newest original confession in a guild's confession channel carries the
//! submit + reply control set. The guild config remembers which message that is, so the
//! previous one is addressed directly instead of searched for. The pointer is moved with
//! a compare-and-set, and whichever submission moves it away from a message removes that
//! message's controls.

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::platform::PlatformError,
    model::{guild_config::GuildConfig, platform::MessageLocation},
    service::platform::ChatPlatform,
};

use super::ConfessionService;

/// Compare-and-set attempts before a submission gives up the live slot.
const LIVE_SWAP_ATTEMPTS: usize = 5;

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Moves the live submit controls to `posted`.
    ///
    /// Removes the controls from the previously recorded live message and records
    /// `posted` in its place. When concurrent submissions keep moving the pointer and
    /// `posted` never takes it, `posted` loses its own controls instead. Failures are
    /// logged and never returned.
    pub(super) async fn retire_live_controls(&self, guild_id: u64, posted: MessageLocation) {
        let repo = GuildConfigRepository::new(self.db);

        for _ in 0..LIVE_SWAP_ATTEMPTS {
            let config = match repo.find_by_guild_id(guild_id).await {
                Ok(Some(model)) => match GuildConfig::from_entity(model) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::error!("Invalid stored guild config for {}: {}", guild_id, e);
                        return;
                    }
                },
                Ok(None) => return,
                Err(e) => {
                    tracing::error!("Failed to load guild config for {}: {}", guild_id, e);
                    return;
                }
            };

            let previous = config.live_message_id;
            match repo
                .swap_live_message(guild_id, previous, posted.message_id)
                .await
            {
                Ok(true) => {
                    if let Some(previous) = previous.filter(|id| *id != posted.message_id) {
                        self.remove_live_controls(MessageLocation::new(
                            config.channel_id,
                            previous,
                        ))
                        .await;
                    }
                    return;
                }
                Ok(false) => tracing::debug!(
                    "Live confession of guild {} moved while posting {}, retrying",
                    guild_id,
                    posted.message_id
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to record live confession {} for guild {}: {}",
                        posted.message_id,
                        guild_id,
                        e
                    );
                    return;
                }
            }
        }

        tracing::warn!(
            "Confession {} lost the live slot of guild {}",
            posted.message_id,
            guild_id
        );
        self.remove_live_controls(posted).await;
    }

    async fn remove_live_controls(&self, location: MessageLocation) {
        match self.platform.remove_controls(location).await {
            Ok(()) => tracing::debug!("Removed controls from confession {}", location.message_id),
            Err(PlatformError::NotFound) => tracing::debug!(
                "Confession {} no longer exists",
                location.message_id
            ),
            Err(e) => tracing::warn!(
                "Failed to remove controls from confession {}: {}",
                location.message_id,
                e
            ),
        }
    }
}
