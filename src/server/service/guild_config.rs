//! Admin configuration of confession channels, numbering and log destinations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        guild_config::GuildConfigRepository, guild_counter::GuildCounterRepository,
        log_config::LogConfigRepository,
    },
    error::{confession::ConfessionError, AppError},
    model::{
        guild_config::GuildConfig,
        log_config::{LogConfig, UpsertLogConfigParam},
    },
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the channel confessions of a guild are posted to.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored configuration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_confession_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<GuildConfig, AppError> {
        let config = GuildConfigRepository::new(self.db)
            .upsert(guild_id, channel_id)
            .await?;

        tracing::info!(guild_id, channel_id, "Confession channel set");

        GuildConfig::from_entity(config)
    }

    /// Makes the next confession or reply of a guild use `next_index`.
    ///
    /// # Returns
    /// - `Ok(())` - Counter updated
    /// - `Err(AppError::ConfessionErr(InvalidIndex))` - `next_index` is not positive
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_next_index(&self, guild_id: u64, next_index: i64) -> Result<(), AppError> {
        if next_index <= 0 {
            return Err(ConfessionError::InvalidIndex(next_index).into());
        }

        GuildCounterRepository::new(self.db)
            .set_next_index(guild_id, next_index)
            .await?;

        tracing::info!(guild_id, next_index, "Confession counter set");

        Ok(())
    }

    /// Sets where a guild's confessions are mirrored for moderators.
    pub async fn set_log_destination(
        &self,
        param: UpsertLogConfigParam,
    ) -> Result<LogConfig, AppError> {
        let config = LogConfigRepository::new(self.db).upsert(param).await?;

        LogConfig::from_entity(config)
    }
}
