//! Slash commands.
//!
//! Every command is a unit struct implementing [`SlashCommand`] and listed in
//! [`COMMANDS`]. The list is registered globally on `ready` and used to dispatch
//! incoming command interactions by name. The dispatcher defers every command
//! ephemerally before running it and edits the deferred response with the command's
//! result, so commands only return the text to show.

pub mod confess;
pub mod config;
pub mod count;
pub mod guild;
pub mod inert;

use serenity::all::{CommandInteraction, Context, CreateCommand, ResolvedOption, ResolvedValue};
use serenity::async_trait;

use crate::server::{
    error::{confession::ConfessionError, internal::InternalError, AppError},
    model::submission::Submitter,
    state::AppState,
};

use self::{
    confess::ConfessCommand, config::ConfigCommand, count::CountCommand, guild::GuildCommand,
    inert::InertCommand,
};

/// A registered slash command.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Command name as registered with Discord
    fn name(&self) -> &'static str;

    /// Builds the command's registration payload.
    fn register(&self) -> CreateCommand;

    /// Runs the command and returns the ephemeral reply shown to the invoking user.
    ///
    /// # Returns
    /// - `Ok(String)` - Success text
    /// - `Err(AppError)` - Failure; the user sees `AppError::user_message`
    async fn run(
        &self,
        state: &AppState,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<String, AppError>;
}

/// Every command the bot exposes.
pub static COMMANDS: &[&dyn SlashCommand] = &[
    &ConfigCommand,
    &CountCommand,
    &GuildCommand,
    &ConfessCommand,
    &InertCommand::APPEAL,
    &InertCommand::CHECKLOGS,
    &InertCommand::CONFESSBAN,
];

/// Looks up a registered command by name.
pub fn find(name: &str) -> Option<&'static dyn SlashCommand> {
    COMMANDS.iter().copied().find(|command| command.name() == name)
}

/// Returns the invoking guild's ID.
///
/// # Returns
/// - `Ok(u64)` - The guild the command was used in
/// - `Err(AppError::ConfessionErr(GuildOnly))` - The command was used in a DM
pub fn guild_id(command: &CommandInteraction) -> Result<u64, AppError> {
    command
        .guild_id
        .map(|id| id.get())
        .ok_or_else(|| ConfessionError::GuildOnly.into())
}

/// The interaction's user as a confession submitter.
pub fn submitter(command: &CommandInteraction) -> Submitter {
    Submitter {
        user_id: command.user.id.get(),
        name: command.user.name.clone(),
    }
}

/// Unwraps an option Discord is expected to always send.
///
/// # Returns
/// - `Ok(T)` - The option was present
/// - `Err(AppError::InternalErr(MissingInput))` - The option was absent
pub fn required<T>(
    value: Option<T>,
    command: &CommandInteraction,
    option: &'static str,
) -> Result<T, AppError> {
    value.ok_or_else(|| {
        InternalError::MissingInput {
            interaction: command.data.name.clone(),
            input: option,
        }
        .into()
    })
}

pub fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel.id.get()),
        _ => None,
    })
}

/// Returns the URL of an attachment option.
pub fn attachment_option(options: &[ResolvedOption<'_>], name: &str) -> Option<String> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Attachment(attachment) if option.name == name => {
            Some(attachment.url.clone())
        }
        _ => None,
    })
}
