//! Shapes exchanged with the chat platform.
//!
//! These types describe what the confession flow sends to and reads back from Discord
//! without tying the service layer to serenity's builders. The serenity implementation
//! of the platform converts them at the boundary.

use serenity::all::Message;

/// Custom id of the "Submit a confession!" button.
pub const SUBMIT_BUTTON_ID: &str = "confess_submit_button";
/// Custom id of the "Reply" button paired with the submit button.
pub const REPLY_BUTTON_ID: &str = "confess_reply_button";
/// Custom id of the "Reply" button on reply messages.
pub const REPLY_ONLY_BUTTON_ID: &str = "confess_reply_button_v2";

/// A message addressed by its channel (or thread) and message IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageLocation {
    pub channel_id: u64,
    pub message_id: u64,
}

impl MessageLocation {
    pub fn new(channel_id: u64, message_id: u64) -> Self {
        Self {
            channel_id,
            message_id,
        }
    }
}

/// Where an outgoing message is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendTarget {
    /// A channel or thread.
    Channel(u64),
    /// A platform-level reply to an existing message, in that message's channel.
    ReplyTo(MessageLocation),
}

/// Interactive controls attached to a posted confession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSet {
    /// Submit + reply; carried by the newest original confession only.
    SubmitAndReply,
    /// Reply only; carried by every reply.
    ReplyOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich display artifact rendered as a Discord embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEmbed {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub image_url: Option<String>,
    pub fields: Vec<EmbedField>,
}

impl ArtifactEmbed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            image_url: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }
}

/// The parts of a fetched Discord message the reply flow reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedMessage {
    pub location: MessageLocation,
    /// Title of the first embed, if any.
    pub title: Option<String>,
    /// Description of the first embed, if any.
    pub description: Option<String>,
    /// Thread already started from this message, if any.
    pub thread_id: Option<u64>,
}

impl FetchedMessage {
    /// Converts a serenity message at the platform boundary.
    ///
    /// # Arguments
    /// - `message` - Message returned by the Discord API
    ///
    /// # Returns
    /// - `FetchedMessage` - Location, first embed text and attached thread
    pub fn from_message(message: &Message) -> Self {
        let embed = message.embeds.first();

        Self {
            location: MessageLocation::new(message.channel_id.get(), message.id.get()),
            title: embed.and_then(|e| e.title.clone()),
            description: embed.and_then(|e| e.description.clone()),
            thread_id: message.thread.as_ref().map(|t| t.id.get()),
        }
    }
}

/// A thread as listed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadInfo {
    pub thread_id: u64,
    /// Message the thread was started from.
    pub starter_message_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_message;

    #[test]
    fn converts_message_with_embed_and_thread() {
        let message = create_test_message(
            10,
            20,
            Some(("Anonymous Confession (#3)", "\"hello\"")),
            Some(20),
        );

        let fetched = FetchedMessage::from_message(&message);

        assert_eq!(fetched.location, MessageLocation::new(10, 20));
        assert_eq!(fetched.title.as_deref(), Some("Anonymous Confession (#3)"));
        assert_eq!(fetched.description.as_deref(), Some("\"hello\""));
        assert_eq!(fetched.thread_id, Some(20));
    }

    #[test]
    fn converts_plain_message() {
        let message = create_test_message(10, 21, None, None);

        let fetched = FetchedMessage::from_message(&message);

        assert!(fetched.title.is_none());
        assert!(fetched.description.is_none());
        assert!(fetched.thread_id.is_none());
    }
}
