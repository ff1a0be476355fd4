//! Button presses on posted confessions.
//!
//! Both buttons answer by opening a modal. The reply modal's custom id records which
//! message the pressed button was attached to, since the modal submission itself only
//! carries the channel it was submitted from.

use serenity::all::{
    ComponentInteraction, Context, CreateActionRow, CreateInputText, CreateInteractionResponse,
    CreateModal, InputTextStyle,
};

use crate::server::{
    bot::command::confess::MAX_CONFESSION_LENGTH,
    error::AppError,
    model::platform::{MessageLocation, REPLY_BUTTON_ID, REPLY_ONLY_BUTTON_ID, SUBMIT_BUTTON_ID},
};

pub static CONFESSION_MODAL_ID: &str = "confess_modal";
pub static REPLY_MODAL_PREFIX: &str = "confess_reply_modal";

pub static CONTENT_INPUT: &str = "content";
pub static REPLY_INPUT: &str = "reply";
pub static REFERENCE_INPUT: &str = "reference";
pub static ATTACHMENT_INPUT: &str = "attachment_url";

/// Handles a button press.
///
/// Presses on components this bot does not own are ignored.
///
/// # Returns
/// - `Ok(())` - The modal was opened or the press was ignored
/// - `Err(AppError::DiscordErr)` - The modal could not be sent
pub async fn handle_component(
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let custom_id = component.data.custom_id.as_str();

    let modal = if custom_id == SUBMIT_BUTTON_ID {
        confession_modal()
    } else if custom_id == REPLY_BUTTON_ID || custom_id == REPLY_ONLY_BUTTON_ID {
        reply_modal(MessageLocation::new(
            component.channel_id.get(),
            component.message.id.get(),
        ))
    } else {
        tracing::debug!("Ignoring unknown component '{}'", custom_id);
        return Ok(());
    };

    component
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await?;

    Ok(())
}

fn attachment_input() -> CreateActionRow {
    CreateActionRow::InputText(
        CreateInputText::new(
            InputTextStyle::Short,
            "Attachment URL (Optional)",
            ATTACHMENT_INPUT,
        )
        .required(false),
    )
}

pub fn confession_modal() -> CreateModal {
    CreateModal::new(CONFESSION_MODAL_ID, "Submit A Confession").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Paragraph,
                "Confession Content",
                CONTENT_INPUT,
            )
            .placeholder("Type your confession here...")
            .max_length(MAX_CONFESSION_LENGTH)
            .required(true),
        ),
        attachment_input(),
    ])
}

pub fn reply_modal(attached: MessageLocation) -> CreateModal {
    CreateModal::new(reply_modal_id(attached), "Submit A Reply").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Paragraph, "Reply", REPLY_INPUT)
                .max_length(MAX_CONFESSION_LENGTH)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Short,
                "Confession ID or Message link",
                REFERENCE_INPUT,
            )
            .placeholder("Confession ID or Message link (leave blank to reply to this confession)")
            .required(false),
        ),
        attachment_input(),
    ])
}

/// Custom id of the reply modal opened from a button on `attached`.
pub fn reply_modal_id(attached: MessageLocation) -> String {
    format!(
        "{}:{}:{}",
        REPLY_MODAL_PREFIX, attached.channel_id, attached.message_id
    )
}

/// Recovers the message a reply modal was opened from.
///
/// # Returns
/// - `Some(MessageLocation)` - `custom_id` is a reply modal id
/// - `None` - Any other custom id
pub fn parse_reply_modal_id(custom_id: &str) -> Option<MessageLocation> {
    let mut parts = custom_id.split(':');

    if parts.next()? != REPLY_MODAL_PREFIX {
        return None;
    }
    let channel_id = parts.next()?.parse().ok()?;
    let message_id = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(MessageLocation::new(channel_id, message_id))
}
