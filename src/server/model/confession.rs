//! Domain & parameter models for the confession index map.
//!
//! The confession map remembers which physical message each guild-scoped index was
//! posted as, whether it was an original confession or a reply, and the submitted text.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Whether an indexed message is a top-level confession or a reply to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfessionKind {
    Original,
    Reply,
}

impl ConfessionKind {
    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Reply => "reply",
        }
    }

    /// Reads a stored `kind` column.
    ///
    /// Rows written before the column existed, or holding an unknown value, are
    /// treated as originals.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("reply") => Self::Reply,
            _ => Self::Original,
        }
    }
}

/// A confession map row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfessionEntry {
    pub guild_id: u64,
    pub index: i64,
    pub channel_id: u64,
    pub message_id: u64,
    pub kind: ConfessionKind,
    /// Submitted text; `None` for rows stored before content was recorded.
    pub content: Option<String>,
}

impl ConfessionEntry {
    /// Converts an entity model to the confession entry domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ConfessionEntry)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::confession_map::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            index: entity.confession_index,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            kind: ConfessionKind::from_stored(entity.kind.as_deref()),
            content: entity.content,
        })
    }
}

/// Parameters for recording where an index was posted.
#[derive(Debug, Clone)]
pub struct SaveConfessionParam {
    pub guild_id: u64,
    pub index: i64,
    pub channel_id: u64,
    pub message_id: u64,
    pub kind: ConfessionKind,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_kind_reads_as_original() {
        assert_eq!(ConfessionKind::from_stored(None), ConfessionKind::Original);
        assert_eq!(
            ConfessionKind::from_stored(Some("legacy")),
            ConfessionKind::Original
        );
    }

    #[test]
    fn stored_kind_round_trips() {
        for kind in [ConfessionKind::Original, ConfessionKind::Reply] {
            assert_eq!(ConfessionKind::from_stored(Some(kind.as_str())), kind);
        }
    }
}
