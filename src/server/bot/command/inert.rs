use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};
use serenity::async_trait;

use crate::server::{bot::command::SlashCommand, error::AppError, state::AppState};

pub static INACTIVE_MESSAGE: &str = "This command is not active.";

/// Moderation command that is registered but does nothing.
pub struct InertCommand {
    name: &'static str,
    description: &'static str,
    /// Whether the command takes the optional `clear` flag
    clear_option: bool,
}

impl InertCommand {
    pub const APPEAL: Self = Self {
        name: "appeal",
        description: "Appeal a confession ban",
        clear_option: false,
    };

    pub const CHECKLOGS: Self = Self {
        name: "checklogs",
        description: "Check confession logs for a user",
        clear_option: false,
    };

    pub const CONFESSBAN: Self = Self {
        name: "confessban",
        description: "Ban a user from confessing",
        clear_option: true,
    };
}

#[async_trait]
impl SlashCommand for InertCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn register(&self) -> CreateCommand {
        let command = CreateCommand::new(self.name)
            .description(self.description)
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false);

        if self.clear_option {
            command.add_option(CreateCommandOption::new(
                CommandOptionType::Boolean,
                "clear",
                "Clear the ban",
            ))
        } else {
            command
        }
    }

    async fn run(
        &self,
        _state: &AppState,
        _ctx: &Context,
        _command: &CommandInteraction,
    ) -> Result<String, AppError> {
        Ok(INACTIVE_MESSAGE.to_string())
    }
}
