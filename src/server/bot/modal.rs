//! Modal submissions for confessions and replies.

use std::collections::HashMap;

use serenity::all::{
    ActionRow, ActionRowComponent, Channel, ChannelType, Context, GuildChannel, ModalInteraction,
};

use crate::server::{
    bot::component::{ATTACHMENT_INPUT, CONTENT_INPUT, REFERENCE_INPUT, REPLY_INPUT},
    error::{confession::ConfessionError, internal::InternalError, AppError},
    model::{
        platform::MessageLocation,
        submission::{
            ConfessionRequest, ReplyContext, ReplyReference, ReplyRequest, Submitter,
            ThreadContext,
        },
    },
    service::{confession::ConfessionService, platform::SerenityPlatform},
    state::AppState,
};

pub static REPLY_SENT_MESSAGE: &str = ":white_check_mark: Reply sent!";

/// Text inputs of a submitted modal keyed by custom id.
struct ModalInputs<'a> {
    custom_id: &'a str,
    values: HashMap<&'a str, &'a str>,
}

impl<'a> ModalInputs<'a> {
    fn new(custom_id: &'a str, rows: &'a [ActionRow]) -> Self {
        let values = rows
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => input
                    .value
                    .as_deref()
                    .map(|value| (input.custom_id.as_str(), value)),
                _ => None,
            })
            .collect();

        Self { custom_id, values }
    }

    fn required(&self, input: &'static str) -> Result<String, AppError> {
        self.values
            .get(input)
            .map(|value| value.to_string())
            .ok_or_else(|| {
                InternalError::MissingInput {
                    interaction: self.custom_id.to_string(),
                    input,
                }
                .into()
            })
    }

    /// Returns an optional input, treating a blank field as absent.
    fn optional(&self, input: &str) -> Option<String> {
        self.values
            .get(input)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

fn guild_id(modal: &ModalInteraction) -> Result<u64, AppError> {
    modal
        .guild_id
        .map(|id| id.get())
        .ok_or_else(|| ConfessionError::GuildOnly.into())
}

fn submitter(modal: &ModalInteraction) -> Submitter {
    Submitter {
        user_id: modal.user.id.get(),
        name: modal.user.name.clone(),
    }
}

/// Handles the confession modal opened by the submit button.
///
/// # Returns
/// - `Ok(String)` - Success text naming the confession channel
/// - `Err(AppError)` - The confession was not posted
pub async fn submit_confession(
    state: &AppState,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<String, AppError> {
    let inputs = ModalInputs::new(&modal.data.custom_id, &modal.data.components);
    let request = ConfessionRequest {
        guild_id: guild_id(modal)?,
        submitter: submitter(modal),
        content: inputs.required(CONTENT_INPUT)?,
        attachment_url: inputs.optional(ATTACHMENT_INPUT),
        requested_channel_id: None,
    };

    let platform = SerenityPlatform::new(ctx.http.clone());
    let receipt = ConfessionService::new(&state.db, &platform)
        .submit(request)
        .await?;

    Ok(format!(
        ":white_check_mark: Your confession has been added to <#{}>",
        receipt.location.channel_id
    ))
}

/// Handles the reply modal opened by a reply button on `attached`.
///
/// The reference is parsed before anything is looked up, so a malformed reference
/// fails without touching the store.
///
/// # Returns
/// - `Ok(String)` - The reply was posted
/// - `Err(AppError)` - The reply target could not be resolved or the reply not posted
pub async fn submit_reply(
    state: &AppState,
    ctx: &Context,
    modal: &ModalInteraction,
    attached: MessageLocation,
) -> Result<String, AppError> {
    let inputs = ModalInputs::new(&modal.data.custom_id, &modal.data.components);
    let reference = ReplyReference::parse(&inputs.optional(REFERENCE_INPUT).unwrap_or_default())?;

    let channel = modal.channel_id.to_channel(&ctx.http).await?;
    let thread = match channel {
        Channel::Guild(channel) => thread_context(&channel),
        _ => None,
    };

    let request = ReplyRequest {
        guild_id: guild_id(modal)?,
        submitter: submitter(modal),
        content: inputs.required(REPLY_INPUT)?,
        attachment_url: inputs.optional(ATTACHMENT_INPUT),
        reference,
        context: ReplyContext {
            attached_message: Some(attached),
            thread,
        },
    };

    let platform = SerenityPlatform::new(ctx.http.clone());
    ConfessionService::new(&state.db, &platform)
        .reply(request)
        .await?;

    Ok(REPLY_SENT_MESSAGE.to_string())
}

/// Describes the thread a reply was submitted from, if any.
fn thread_context(channel: &GuildChannel) -> Option<ThreadContext> {
    let is_thread = matches!(
        channel.kind,
        ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread
    );
    if !is_thread {
        return None;
    }

    channel.parent_id.map(|parent| ThreadContext {
        thread_id: channel.id.get(),
        parent_channel_id: parent.get(),
    })
}
