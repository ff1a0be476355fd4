//! Serenity implementation of the chat platform seam.

use serenity::{
    all::{
        ButtonStyle, Channel, ChannelId, CreateActionRow, CreateButton, CreateEmbed,
        CreateMessage, CreateThread, EditMessage, GuildChannel, GuildId, MessageId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    error::platform::PlatformError,
    model::platform::{
        ArtifactEmbed, ControlSet, FetchedMessage, MessageLocation, SendTarget, ThreadInfo,
        REPLY_BUTTON_ID, REPLY_ONLY_BUTTON_ID, SUBMIT_BUTTON_ID,
    },
    service::platform::ChatPlatform,
};

/// Discord platform backed by serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Renders an artifact as a serenity embed.
fn build_embed(embed: ArtifactEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(embed.title).colour(embed.color);

    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    if let Some(url) = embed.image_url {
        builder = builder.image(url);
    }
    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }

    builder
}

/// Builds the button row for a control set.
pub fn build_controls(controls: ControlSet) -> Vec<CreateActionRow> {
    let reply = |custom_id: &str| {
        CreateButton::new(custom_id)
            .label("Reply")
            .style(ButtonStyle::Secondary)
    };

    let buttons = match controls {
        ControlSet::SubmitAndReply => vec![
            CreateButton::new(SUBMIT_BUTTON_ID)
                .label("Submit a confession!")
                .style(ButtonStyle::Primary),
            reply(REPLY_BUTTON_ID),
        ],
        ControlSet::ReplyOnly => vec![reply(REPLY_ONLY_BUTTON_ID)],
    };

    vec![CreateActionRow::Buttons(buttons)]
}

fn thread_info(thread: &GuildChannel) -> ThreadInfo {
    ThreadInfo {
        thread_id: thread.id.get(),
        // Threads started from a message share its ID
        starter_message_id: Some(thread.id.get()),
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn send_message(
        &self,
        target: SendTarget,
        embed: ArtifactEmbed,
        controls: Option<ControlSet>,
    ) -> Result<MessageLocation, PlatformError> {
        let mut message = CreateMessage::new().embed(build_embed(embed));
        if let Some(controls) = controls {
            message = message.components(build_controls(controls));
        }

        let channel_id = match target {
            SendTarget::Channel(channel_id) => ChannelId::new(channel_id),
            SendTarget::ReplyTo(location) => {
                let channel_id = ChannelId::new(location.channel_id);
                message = message
                    .reference_message((channel_id, MessageId::new(location.message_id)));
                channel_id
            }
        };

        let sent = channel_id.send_message(&self.http, message).await?;

        Ok(MessageLocation::new(sent.channel_id.get(), sent.id.get()))
    }

    async fn remove_controls(&self, location: MessageLocation) -> Result<(), PlatformError> {
        ChannelId::new(location.channel_id)
            .edit_message(
                &self.http,
                MessageId::new(location.message_id),
                EditMessage::new().components(vec![]),
            )
            .await?;

        Ok(())
    }

    async fn fetch_message(
        &self,
        location: MessageLocation,
    ) -> Result<Option<FetchedMessage>, PlatformError> {
        match ChannelId::new(location.channel_id)
            .message(&self.http, MessageId::new(location.message_id))
            .await
        {
            Ok(message) => Ok(Some(FetchedMessage::from_message(&message))),
            Err(err) => match PlatformError::from(err) {
                PlatformError::NotFound => Ok(None),
                err => Err(err),
            },
        }
    }

    async fn active_threads(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError> {
        let data = GuildId::new(guild_id).get_active_threads(&self.http).await?;

        Ok(data
            .threads
            .iter()
            .filter(|thread| thread.parent_id.map(|id| id.get()) == Some(channel_id))
            .map(thread_info)
            .collect())
    }

    async fn archived_threads(
        &self,
        channel_id: u64,
        limit: u64,
    ) -> Result<Vec<ThreadInfo>, PlatformError> {
        let data = ChannelId::new(channel_id)
            .get_archived_public_threads(&self.http, None, Some(limit))
            .await?;

        Ok(data.threads.iter().map(thread_info).collect())
    }

    async fn create_thread(
        &self,
        location: MessageLocation,
        name: &str,
    ) -> Result<u64, PlatformError> {
        let thread = ChannelId::new(location.channel_id)
            .create_thread_from_message(
                &self.http,
                MessageId::new(location.message_id),
                CreateThread::new(name),
            )
            .await?;

        Ok(thread.id.get())
    }

    async fn channel_in_guild(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<bool, PlatformError> {
        match ChannelId::new(channel_id).to_channel(&self.http).await {
            Ok(Channel::Guild(channel)) => Ok(channel.guild_id.get() == guild_id),
            Ok(_) => Ok(false),
            Err(err) => match PlatformError::from(err) {
                PlatformError::NotFound => Ok(false),
                err => Err(err),
            },
        }
    }
}

