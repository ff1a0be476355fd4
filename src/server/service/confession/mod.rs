//! Confession and reply routing.
//!
//! This module provides the `ConfessionService`, which decides where a submission is
//! posted, numbers it, records it in the confession map and mirrors it to the guild's
//! moderator log. The service is organized into separate modules by concern:
//! - `submit` - New top-level confessions
//! - `reply` - Replies, either into a confession's thread or as direct replies
//! - `resolve` - Locating the message a reply targets and its reply thread
//! - `cleanup` - Retiring submit controls from the previous confession
//! - `log` - Moderator log mirror
//! - `artifact` - Embed rendering and legacy embed parsing

pub mod artifact;
pub mod cleanup;
pub mod log;
pub mod reply;
pub mod resolve;
pub mod submit;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::{confession::ConfessionError, AppError},
    model::guild_config::GuildConfig,
    service::platform::ChatPlatform,
};

/// Service routing confessions and replies through the chat platform.
///
/// Holds the database connection and the platform the messages are posted on. Platform
/// failures that block the post are returned; failures of secondary effects
/// (control cleanup, log mirror) are logged and swallowed.
pub struct ConfessionService<'a, P: ChatPlatform + ?Sized> {
    db: &'a DatabaseConnection,
    platform: &'a P,
}

impl<'a, P: ChatPlatform + ?Sized> ConfessionService<'a, P> {
    /// Creates a new ConfessionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `platform` - Chat platform messages are posted on
    ///
    /// # Returns
    /// - `ConfessionService` - New service instance
    pub fn new(db: &'a DatabaseConnection, platform: &'a P) -> Self {
        Self { db, platform }
    }

    /// Loads the guild's confession channel configuration.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The guild is configured
    /// - `Err(AppError::ConfessionErr(NotConfigured))` - No confession channel set
    /// - `Err(AppError::DbErr)` - Database error
    async fn guild_config(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        let config = GuildConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(ConfessionError::NotConfigured(guild_id))?;

        GuildConfig::from_entity(config)
    }
}
