use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};
use serenity::async_trait;

use crate::server::{
    bot::command::{guild_id, integer_option, required, SlashCommand},
    error::AppError,
    service::guild_config::GuildConfigService,
    state::AppState,
};

/// `/count number` - sets the index the next confession or reply receives.
pub struct CountCommand;

#[async_trait]
impl SlashCommand for CountCommand {
    fn name(&self) -> &'static str {
        "count"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Set the next confession number")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "number",
                    "Index the next confession will receive",
                )
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
        let number = required(integer_option(&options, "number"), command, "number")?;

        GuildConfigService::new(&state.db)
            .set_next_index(guild_id, number)
            .await?;

        Ok(format!(
            "✅ The next confession index has been set to **{}**.",
            number
        ))
    }
}
