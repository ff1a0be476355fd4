//! Domain model for a guild's confession channel configuration.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Confession settings of a single guild.
///
/// `live_message_id` is the one message in the confession channel that still carries
/// the submit + reply control set. It is cleared whenever the channel changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub channel_id: u64,
    pub live_message_id: Option<u64>,
}

impl GuildConfig {
    /// Converts an entity model to the guild config domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let channel_id = parse_u64_from_string(entity.channel_id)?;
        let live_message_id = entity
            .live_message_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            guild_id,
            channel_id,
            live_message_id,
        })
    }
}
