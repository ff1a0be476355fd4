//! Parameter models for confession and reply submissions.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::{
    error::confession::ConfessionError,
    model::{confession::ConfessionKind, platform::MessageLocation},
};

/// Trailing numeric segment of a Discord message link.
static MESSAGE_LINK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)$").expect("message link pattern is valid"));

/// The user who submitted a confession or reply.
///
/// Only ever shown in the moderator log mirror, never in the public post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub user_id: u64,
    pub name: String,
}

/// A new top-level confession.
#[derive(Debug, Clone)]
pub struct ConfessionRequest {
    pub guild_id: u64,
    pub submitter: Submitter,
    pub content: String,
    pub attachment_url: Option<String>,
    /// Channel the user asked to post in; must match the configured channel.
    pub requested_channel_id: Option<u64>,
}

/// What a reply's target field referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyReference {
    /// Blank: the message the reply control was attached to, or the thread's original.
    Attached,
    /// A confession index.
    Index(i64),
    /// A raw message ID taken from a message link.
    Message(u64),
}

impl ReplyReference {
    /// Parses the free-text target field of the reply form.
    ///
    /// # Arguments
    /// - `input` - Raw field value; surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(ReplyReference)` - Blank, integer index, or message link
    /// - `Err(ConfessionError::InvalidReference)` - Anything else
    pub fn parse(input: &str) -> Result<Self, ConfessionError> {
        let input = input.trim();

        if input.is_empty() {
            return Ok(Self::Attached);
        }

        if let Ok(index) = input.parse::<i64>() {
            return Ok(Self::Index(index));
        }

        MESSAGE_LINK_ID
            .captures(input)
            .and_then(|captures| captures[1].parse::<u64>().ok())
            .map(Self::Message)
            .ok_or_else(|| ConfessionError::InvalidReference(input.to_string()))
    }
}

/// The thread an interaction was invoked from.
///
/// A thread started from a message shares that message's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadContext {
    pub thread_id: u64,
    pub parent_channel_id: u64,
}

impl ThreadContext {
    /// Location of the message this thread was started from.
    pub fn starter_message(&self) -> MessageLocation {
        MessageLocation::new(self.parent_channel_id, self.thread_id)
    }
}

/// Ambient context of a reply interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplyContext {
    /// Message the reply control was attached to.
    pub attached_message: Option<MessageLocation>,
    /// Set when the interaction happened inside a thread.
    pub thread: Option<ThreadContext>,
}

/// A reply to an existing confession or reply.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub guild_id: u64,
    pub submitter: Submitter,
    pub content: String,
    pub attachment_url: Option<String>,
    pub reference: ReplyReference,
    pub context: ReplyContext,
}

/// The message a reply was resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    pub location: MessageLocation,
    pub index: i64,
    /// Text of the target, when known.
    pub content: Option<String>,
    pub kind: ConfessionKind,
    /// Thread already started from the target message.
    pub thread_id: Option<u64>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfessionReceipt {
    pub index: i64,
    /// Where the message landed; `channel_id` is the channel or thread.
    pub location: MessageLocation,
}
