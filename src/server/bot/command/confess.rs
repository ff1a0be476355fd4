use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption,
};
use serenity::async_trait;

use crate::server::{
    bot::command::{
        attachment_option, channel_option, guild_id, required, string_option, submitter,
        SlashCommand,
    },
    error::AppError,
    model::submission::ConfessionRequest,
    service::{confession::ConfessionService, platform::SerenityPlatform},
    state::AppState,
};

/// Longest confession Discord lets a user type.
pub const MAX_CONFESSION_LENGTH: u16 = 2000;

/// `/confess confess [attachment] [channel] [allow_replies]` - posts an anonymous
/// confession.
pub struct ConfessCommand;

#[async_trait]
impl SlashCommand for ConfessCommand {
    fn name(&self) -> &'static str {
        "confess"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Submits a confession")
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "confess",
                    "Your confession text",
                )
                .max_length(MAX_CONFESSION_LENGTH)
                .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Attachment,
                "attachment",
                "Attach an image (optional)",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Post in a specific channel (if allowed)",
                )
                .channel_types(vec![ChannelType::Text]),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Boolean,
                "allow_replies",
                "Allow replies (True/False)",
            ))
    }

    /// Posts the confession. `allow_replies` is accepted but every confession gets
    /// reply controls.
    async fn run(
        &self,
        state: &AppState,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<String, AppError> {
        let options = command.data.options();
        let request = ConfessionRequest {
            guild_id: guild_id(command)?,
            submitter: submitter(command),
            content: required(string_option(&options, "confess"), command, "confess")?
                .to_string(),
            attachment_url: attachment_option(&options, "attachment"),
            requested_channel_id: channel_option(&options, "channel"),
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
}
