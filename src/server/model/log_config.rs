//! Domain model for the cross-guild log mirror destination.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Where confessions posted in `guild_id` are mirrored for moderators.
///
/// The target guild may differ from the guild being logged.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub guild_id: u64,
    pub target_guild_id: u64,
    pub target_channel_id: u64,
}

impl LogConfig {
    /// Converts an entity model to the log config domain model
    ///
    /// # Returns
    /// - `Ok(LogConfig)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::log_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            target_guild_id: parse_u64_from_string(entity.target_guild_id)?,
            target_channel_id: parse_u64_from_string(entity.target_channel_id)?,
        })
    }
}

/// Parameters for setting a guild's log destination.
#[derive(Debug, Clone)]
pub struct UpsertLogConfigParam {
    pub guild_id: u64,
    pub target_guild_id: u64,
    pub target_channel_id: u64,
}
