//! In-memory chat platform for service tests.
//!
//! Messages, channels and threads live behind a single mutex, so concurrent calls
//! observe each other the way they would on Discord: of two racing thread creations
//! on one message, exactly one succeeds and the other sees `ThreadAlreadyExists`.

use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

use crate::server::{
    error::platform::PlatformError,
    model::platform::{
        ArtifactEmbed, ControlSet, FetchedMessage, MessageLocation, SendTarget, ThreadInfo,
    },
    service::platform::ChatPlatform,
};

/// A message posted through [`ChatPlatform::send_message`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub target: SendTarget,
    pub location: MessageLocation,
    pub embed: ArtifactEmbed,
    pub controls: Option<ControlSet>,
}

#[derive(Debug, Clone)]
struct StoredMessage {
    embed: Option<ArtifactEmbed>,
    controls: Option<ControlSet>,
}

#[derive(Debug, Clone)]
struct StoredThread {
    thread_id: u64,
    parent_channel_id: u64,
    starter_message_id: u64,
    name: String,
    archived: bool,
    /// Whether fetching the starter message reports this thread.
    attached: bool,
}

#[derive(Default)]
struct FakeState {
    next_id: u64,
    /// Channel ID to owning guild ID.
    channels: HashMap<u64, u64>,
    messages: HashMap<MessageLocation, StoredMessage>,
    threads: Vec<StoredThread>,
    sent: Vec<SentMessage>,
    failing_channels: HashSet<u64>,
    fail_remove_controls: bool,
    thread_creations: usize,
}

impl FakeState {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn channel_exists(&self, channel_id: u64) -> bool {
        self.channels.contains_key(&channel_id)
    }
}

pub struct FakePlatform {
    state: Mutex<FakeState>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 10_000,
                ..Default::default()
            }),
        }
    }

    /// Registers a channel the bot can see.
    pub async fn add_channel(&self, guild_id: u64, channel_id: u64) {
        self.state.lock().await.channels.insert(channel_id, guild_id);
    }

    /// Places an existing message, e.g. a confession posted before the test started.
    pub async fn seed_message(
        &self,
        channel_id: u64,
        message_id: u64,
        embed: Option<ArtifactEmbed>,
    ) -> MessageLocation {
        let location = MessageLocation::new(channel_id, message_id);
        self.state.lock().await.messages.insert(
            location,
            StoredMessage {
                embed,
                controls: None,
            },
        );
        location
    }

    /// Places an existing thread started from `starter`.
    ///
    /// Archived threads count as archived in the order they are seeded.
    ///
    /// A detached thread is not reported when the starter is fetched, modelling a stale
    /// message object; thread creation on the starter still fails as already existing.
    pub async fn seed_thread(&self, starter: MessageLocation, archived: bool, attached: bool) -> u64 {
        let mut state = self.state.lock().await;
        let guild_id = state
            .channels
            .get(&starter.channel_id)
            .copied()
            .unwrap_or_default();

        state.channels.insert(starter.message_id, guild_id);
        state.threads.push(StoredThread {
            thread_id: starter.message_id,
            parent_channel_id: starter.channel_id,
            starter_message_id: starter.message_id,
            name: "Replies".to_string(),
            archived,
            attached,
        });

        starter.message_id
    }

    pub async fn set_controls(&self, location: MessageLocation, controls: Option<ControlSet>) {
        if let Some(message) = self.state.lock().await.messages.get_mut(&location) {
            message.controls = controls;
        }
    }

    /// Makes every send to `channel_id` fail with a Discord error.
    pub async fn fail_sends_to(&self, channel_id: u64) {
        self.state.lock().await.failing_channels.insert(channel_id);
    }

    pub async fn fail_remove_controls(&self) {
        self.state.lock().await.fail_remove_controls = true;
    }

    pub async fn sent(&self) -> Vec<SentMessage> {
        self.state.lock().await.sent.clone()
    }

    pub async fn controls_of(&self, location: MessageLocation) -> Option<ControlSet> {
        self.state
            .lock()
            .await
            .messages
            .get(&location)
            .and_then(|message| message.controls)
    }

    /// Names of the threads started from `starter`.
    pub async fn thread_names(&self, starter: MessageLocation) -> Vec<String> {
        self.state
            .lock()
            .await
            .threads
            .iter()
            .filter(|thread| {
                thread.parent_channel_id == starter.channel_id
                    && thread.starter_message_id == starter.message_id
            })
            .map(|thread| thread.name.clone())
            .collect()
    }

    /// Number of successful thread creations.
    pub async fn thread_creations(&self) -> usize {
        self.state.lock().await.thread_creations
    }
}

fn discord_error() -> PlatformError {
    PlatformError::Discord(Box::new(serenity::Error::Other("simulated Discord failure")))
}

#[async_trait]
impl ChatPlatform for FakePlatform {
    async fn send_message(
        &self,
        target: SendTarget,
        embed: ArtifactEmbed,
        controls: Option<ControlSet>,
    ) -> Result<MessageLocation, PlatformError> {
        let mut state = self.state.lock().await;

        let channel_id = match target {
            SendTarget::Channel(channel_id) => channel_id,
            SendTarget::ReplyTo(location) => {
                if !state.messages.contains_key(&location) {
                    return Err(PlatformError::NotFound);
                }
                location.channel_id
            }
        };

        if state.failing_channels.contains(&channel_id) {
            return Err(discord_error());
        }
        if !state.channel_exists(channel_id) {
            return Err(PlatformError::NotFound);
        }

        let location = MessageLocation::new(channel_id, state.allocate_id());
        state.messages.insert(
            location,
            StoredMessage {
                embed: Some(embed.clone()),
                controls,
            },
        );
        state.sent.push(SentMessage {
            target,
            location,
            embed,
            controls,
        });

        Ok(location)
    }

    async fn remove_controls(&self, location: MessageLocation) -> Result<(), PlatformError> {
        let mut state = self.state.lock().await;

        if state.fail_remove_controls {
            return Err(discord_error());
        }

        match state.messages.get_mut(&location) {
            Some(message) => {
                message.controls = None;
                Ok(())
            }
            None => Err(PlatformError::NotFound),
        }
    }

    async fn fetch_message(
        &self,
        location: MessageLocation,
    ) -> Result<Option<FetchedMessage>, PlatformError> {
        let state = self.state.lock().await;

        Ok(state.messages.get(&location).map(|message| {
            let thread_id = state
                .threads
                .iter()
                .find(|thread| {
                    thread.attached
                        && thread.parent_channel_id == location.channel_id
                        && thread.starter_message_id == location.message_id
                })
                .map(|thread| thread.thread_id);

            FetchedMessage {
                location,
                title: message.embed.as_ref().map(|embed| embed.title.clone()),
                description: message
                    .embed
                    .as_ref()
                    .and_then(|embed| embed.description.clone()),
                thread_id,
            }
        }))
    }

    async fn active_threads(
        &self,
        _guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError> {
        let state = self.state.lock().await;

        Ok(state
            .threads
            .iter()
            .filter(|thread| !thread.archived && thread.parent_channel_id == channel_id)
            .map(|thread| ThreadInfo {
                thread_id: thread.thread_id,
                starter_message_id: Some(thread.starter_message_id),
            })
            .collect())
    }

    async fn archived_threads(
        &self,
        channel_id: u64,
        limit: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError> {
        let state = self.state.lock().await;

        // Like Discord, most recently archived first; seeding order is archive order
        Ok(state
            .threads
            .iter()
            .rev()
            .filter(|thread| thread.archived && thread.parent_channel_id == channel_id)
            .take(limit as usize)
            .map(|thread| ThreadInfo {
                thread_id: thread.thread_id,
                starter_message_id: Some(thread.starter_message_id),
            })
            .collect())
    }

    async fn create_thread(
        &self,
        location: MessageLocation,
        name: &str,
    ) -> Result<u64, PlatformError> {
        let mut state = self.state.lock().await;

        if !state.messages.contains_key(&location) {
            return Err(PlatformError::NotFound);
        }
        if state.threads.iter().any(|thread| {
            thread.parent_channel_id == location.channel_id
                && thread.starter_message_id == location.message_id
        }) {
            return Err(PlatformError::ThreadAlreadyExists);
        }

        let guild_id = state
            .channels
            .get(&location.channel_id)
            .copied()
            .unwrap_or_default();
        state.channels.insert(location.message_id, guild_id);
        state.threads.push(StoredThread {
            thread_id: location.message_id,
            parent_channel_id: location.channel_id,
            starter_message_id: location.message_id,
            name: name.to_string(),
            archived: false,
            attached: true,
        });
        state.thread_creations += 1;

        Ok(location.message_id)
    }

    async fn channel_in_guild(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<bool, PlatformError> {
        Ok(self.state.lock().await.channels.get(&channel_id) == Some(&guild_id))
    }
}
