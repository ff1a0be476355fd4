//! Log config factory for creating moderator log destinations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test log configs.
///
/// By default the log target lives in the same guild as the source.
pub struct LogConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    target_guild_id: Option<String>,
    target_channel_id: String,
}

impl<'a> LogConfigFactory<'a> {
    /// Creates a new LogConfigFactory.
    ///
    /// Defaults:
    /// - guild_id: unique generated ID
    /// - target_guild_id: same as `guild_id`
    /// - target_channel_id: unique generated ID
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            target_guild_id: None,
            target_channel_id: next_id().to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn target_guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.target_guild_id = Some(guild_id.into());
        self
    }

    pub fn target_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.target_channel_id = channel_id.into();
        self
    }

    pub async fn build(self) -> Result<entity::log_config::Model, DbErr> {
        let target_guild_id = self
            .target_guild_id
            .unwrap_or_else(|| self.guild_id.clone());

        entity::log_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            target_guild_id: ActiveValue::Set(target_guild_id),
            target_channel_id: ActiveValue::Set(self.target_channel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a log config for `guild_id` pointing at `target_channel_id` in the same guild.
pub async fn create_log_config(
    db: &DatabaseConnection,
    guild_id: &str,
    target_channel_id: &str,
) -> Result<entity::log_config::Model, DbErr> {
    LogConfigFactory::new(db)
        .guild_id(guild_id)
        .target_channel_id(target_channel_id)
        .build()
        .await
}
