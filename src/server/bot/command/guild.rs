use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};
use serenity::async_trait;

use crate::server::{
    bot::command::{guild_id, required, string_option, SlashCommand},
    error::{confession::ConfessionError, AppError},
    model::log_config::UpsertLogConfigParam,
    service::guild_config::GuildConfigService,
    state::AppState,
};

/// `/guild guild_id channel_id` - mirrors this guild's confessions to a log channel,
/// possibly in another guild.
pub struct GuildCommand;

/// Parses a snowflake typed by an admin.
///
/// Snowflakes exceed the integer range Discord accepts for integer options, so they are
/// taken as strings.
fn parse_id(value: &str) -> Result<u64, ConfessionError> {
    let value = value.trim();
    value
        .parse::<u64>()
        .map_err(|_| ConfessionError::InvalidId(value.to_string()))
}

#[async_trait]
impl SlashCommand for GuildCommand {
    fn name(&self) -> &'static str {
        "guild"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Set the target guild and channel for confession logs")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "guild_id",
                    "ID of the guild holding the log channel",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "channel_id",
                    "ID of the log channel",
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
        let target_guild_id = parse_id(required(
            string_option(&options, "guild_id"),
            command,
            "guild_id",
        )?)?;
        let target_channel_id = parse_id(required(
            string_option(&options, "channel_id"),
            command,
            "channel_id",
        )?)?;

        let config = GuildConfigService::new(&state.db)
            .set_log_destination(UpsertLogConfigParam {
                guild_id,
                target_guild_id,
                target_channel_id,
            })
            .await?;

        Ok(format!(
            "✅ Confession logs will now be sent to channel `{}` in guild `{}`.",
            config.target_channel_id, config.target_guild_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_snowflake() {
        assert_eq!(parse_id(" 1187654321098765432 "), Ok(1187654321098765432));
    }

    #[test]
    fn rejects_channel_mention() {
        assert_eq!(
            parse_id("<#123>"),
            Err(ConfessionError::InvalidId("<#123>".to_string()))
        );
    }
}
