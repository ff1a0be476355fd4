//! Chat platform seam.
//!
//! The confession services talk to Discord only through [`ChatPlatform`], so routing
//! logic can be exercised against an in-memory platform in tests. [`SerenityPlatform`]
//! is the production implementation over serenity's HTTP client.

pub mod discord;

#[cfg(test)]
pub mod fake;

use serenity::async_trait;

use crate::server::{
    error::platform::PlatformError,
    model::platform::{
        ArtifactEmbed, ControlSet, FetchedMessage, MessageLocation, SendTarget, ThreadInfo,
    },
};

pub use discord::SerenityPlatform;

/// Outbound operations the confession flow needs from the chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Posts an embed, optionally with a control set, and returns where it landed.
    async fn send_message(
        &self,
        target: SendTarget,
        embed: ArtifactEmbed,
        controls: Option<ControlSet>,
    ) -> Result<MessageLocation, PlatformError>;

    /// Strips every interactive control from a message.
    async fn remove_controls(&self, location: MessageLocation) -> Result<(), PlatformError>;

    /// Fetches a message; `Ok(None)` when it does not exist.
    async fn fetch_message(
        &self,
        location: MessageLocation,
    ) -> Result<Option<FetchedMessage>, PlatformError>;

    /// Active threads of the guild whose parent is `channel_id`.
    async fn active_threads(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError>;

    /// Most recent archived public threads of a channel, at most `limit`.
    async fn archived_threads(
        &self,
        channel_id: u64,
        limit: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError>;

    /// Starts a public thread from a message and returns the thread ID.
    ///
    /// Fails with [`PlatformError::ThreadAlreadyExists`] when the message already has one.
    async fn create_thread(
        &self,
        location: MessageLocation,
        name: &str,
    ) -> Result<u64, PlatformError>;

    /// Whether `channel_id` is a channel of `guild_id` visible to the bot.
    async fn channel_in_guild(&self, guild_id: u64, channel_id: u64)
        -> Result<bool, PlatformError>;
}
