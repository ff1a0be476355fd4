//! Moderator log mirror.

use crate::server::{
    data::log_config::LogConfigRepository,
    model::{log_config::LogConfig, platform::SendTarget},
    service::platform::ChatPlatform,
};

use super::{
    artifact::{self, LogEntry},
    ConfessionService,
};

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Mirrors a confession or reply to the guild's log destination.
    ///
    /// No-op when the guild has no log destination. An unreachable destination or a
    /// failed send is logged and never returned.
    pub(super) async fn mirror_to_log(&self, guild_id: u64, entry: &LogEntry<'_>) {
        let config = match LogConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await
        {
            Ok(Some(model)) => match LogConfig::from_entity(model) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Invalid stored log config for guild {}: {}", guild_id, e);
                    return;
                }
            },
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Failed to load log config for guild {}: {}", guild_id, e);
                return;
            }
        };

        match self
            .platform
            .channel_in_guild(config.target_guild_id, config.target_channel_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    "Log channel {} not found in guild {}",
                    config.target_channel_id,
                    config.target_guild_id
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to look up log channel {}: {}",
                    config.target_channel_id,
                    e
                );
                return;
            }
        }

        if let Err(e) = self
            .platform
            .send_message(
                SendTarget::Channel(config.target_channel_id),
                artifact::log_embed(entry),
                None,
            )
            .await
        {
            tracing::error!(
                "Failed to send log to channel {}: {}",
                config.target_channel_id,
                e
            );
        }
    }
}
