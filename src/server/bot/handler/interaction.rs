//! Interaction event dispatch.
//!
//! Slash commands and modal submissions are deferred ephemerally, run, and answered by
//! editing the deferred response with either the success text or the failure's
//! user-facing message. Button presses open modals directly, since a modal cannot be
//! sent after deferring.

use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Interaction, ModalInteraction,
};

use crate::server::{
    bot::{command, component, modal},
    error::AppError,
    state::AppState,
};

/// Handles an interaction received from the gateway.
///
/// Errors are logged here. Nothing is propagated further since the gateway has no one
/// to hand them to.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let result = match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => component::handle_component(&ctx, &component).await,
        Interaction::Modal(modal) => handle_modal(state, &ctx, &modal).await,
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Failed to respond to interaction: {:?}", e);
    }
}

async fn handle_command(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(command) = command::find(&interaction.data.name) else {
        tracing::warn!("Received unknown command '{}'", interaction.data.name);
        return Ok(());
    };

    interaction.defer_ephemeral(&ctx.http).await?;

    let content = match command.run(state, ctx, interaction).await {
        Ok(content) => content,
        Err(e) => failure_reply(&format!("/{}", command.name()), e),
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

async fn handle_modal(
    state: &AppState,
    ctx: &Context,
    interaction: &ModalInteraction,
) -> Result<(), AppError> {
    let custom_id = interaction.data.custom_id.as_str();
    let attached = component::parse_reply_modal_id(custom_id);

    if custom_id != component::CONFESSION_MODAL_ID && attached.is_none() {
        tracing::warn!("Received unknown modal '{}'", custom_id);
        return Ok(());
    }

    interaction.defer_ephemeral(&ctx.http).await?;

    let result = match attached {
        Some(attached) => modal::submit_reply(state, ctx, interaction, attached).await,
        None => modal::submit_confession(state, ctx, interaction).await,
    };

    let content = match result {
        Ok(content) => content,
        Err(e) => failure_reply(custom_id, e),
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Logs a failed interaction and returns the text shown to its user.
///
/// Rejected submissions are expected user mistakes and log at `info`; anything else
/// is a failure of the bot and logs at `error`.
fn failure_reply(interaction: &str, e: AppError) -> String {
    match &e {
        AppError::ConfessionErr(err) => {
            tracing::info!("Interaction '{}' rejected: {}", interaction, err)
        }
        _ => tracing::error!("Interaction '{}' failed: {:?}", interaction, e),
    }

    e.user_message()
}
