use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions,
};
use serenity::async_trait;

use crate::server::{
    bot::command::{channel_option, guild_id, required, SlashCommand},
    error::AppError,
    service::guild_config::GuildConfigService,
    state::AppState,
};

/// `/config channel` - sets the guild's confession channel.
pub struct ConfigCommand;

#[async_trait]
impl SlashCommand for ConfigCommand {
    fn name(&self) -> &'static str {
        "config"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Set the confessions channel")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "The channel where confessions will be sent",
                )
                .channel_types(vec![ChannelType::Text])
                .required(true),
            )
    }

    async fn run(
        &self,
        state: &AppState,
        _ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<String, AppError> {
        let guild_id = guild_id(command)?;
        let options = command.data.options();
        let channel_id = required(channel_option(&options, "channel"), command, "channel")?;

        let config = GuildConfigService::new(&state.db)
            .set_confession_channel(guild_id, channel_id)
            .await?;

        Ok(format!(
            "✅ Confessions channel has been set to <#{}>",
            config.channel_id
        ))
    }
}
