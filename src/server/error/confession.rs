//! Failures of confession submission and reply routing.
//!
//! Every variant is user-visible and never retried: the submitter sees the text from
//! [`ConfessionError::user_message`] in their ephemeral acknowledgment.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfessionError {
    /// The guild has no confession channel set.
    #[error("guild {0} has no confession channel configured")]
    NotConfigured(u64),

    /// A confession was submitted for a channel other than the configured one.
    #[error("channel {requested} is not the confession channel {configured}")]
    ChannelNotAllowed {
        /// Channel the user asked to post in
        requested: u64,
        /// The guild's configured confession channel
        configured: u64,
    },

    /// An admin tried to set a non-positive next index.
    #[error("confession index must be positive, got {0}")]
    InvalidIndex(i64),

    /// The reply target index has no ConfessionMap row.
    #[error("confession #{0} not found")]
    IndexNotFound(i64),

    /// The reply target message could not be fetched.
    #[error("message {0} not found")]
    MessageNotFound(u64),

    /// The reply target is neither an index nor a message link.
    #[error("invalid reply reference '{0}'")]
    InvalidReference(String),

    /// The reply target exists but does not look like a confession.
    #[error("message {0} is not a confession")]
    MalformedTarget(u64),

    /// A blank reply reference was given with no message to fall back on.
    #[error("no reply target could be determined")]
    MissingTarget,

    /// The thread for an original confession could not be found or created.
    #[error("reply thread for confession #{0} unavailable")]
    ThreadUnavailable(i64),

    /// An admin command was given an ID that is not a snowflake.
    #[error("'{0}' is not a valid Discord ID")]
    InvalidId(String),

    /// The interaction did not come from a guild.
    #[error("interaction outside of a guild")]
    GuildOnly,
}

impl ConfessionError {
    /// Text shown to the submitting user.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured(_) => {
                "Error: The confession channel has not been set up.".to_string()
            }
            Self::ChannelNotAllowed {
                requested,
                configured,
            } => format!(
                "Confessions not allowed in <#{}>. They must go to <#{}>.",
                requested, configured
            ),
            Self::InvalidIndex(_) => "Number must be positive.".to_string(),
            Self::IndexNotFound(index) => {
                format!("Error: Confession #{} not found in database.", index)
            }
            Self::MessageNotFound(_) => "Error: Message ID not found.".to_string(),
            Self::InvalidReference(_) => {
                "Error: Invalid Confession ID or Message Link.".to_string()
            }
            Self::MalformedTarget(_) => {
                "Error: Could not process the reply. Target message is malformed.".to_string()
            }
            Self::MissingTarget => "Error: Failed to determine target message.".to_string(),
            Self::ThreadUnavailable(_) => {
                "Error: Could not find or create the reply thread.".to_string()
            }
            Self::InvalidId(value) => format!("Error: `{}` is not a valid ID.", value),
            Self::GuildOnly => "This command can only be used in a server.".to_string(),
        }
    }
}
