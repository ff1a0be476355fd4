//! Guild counter factory for seeding confession numbering.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild counters.
pub struct GuildCounterFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    last_index: i64,
}

impl<'a> GuildCounterFactory<'a> {
    /// Creates a new GuildCounterFactory.
    ///
    /// Defaults:
    /// - guild_id: unique generated ID
    /// - last_index: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            last_index: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the last index handed out; the next allocation returns one more.
    pub fn last_index(mut self, last_index: i64) -> Self {
        self.last_index = last_index;
        self
    }

    pub async fn build(self) -> Result<entity::guild_counter::Model, DbErr> {
        entity::guild_counter::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            last_index: ActiveValue::Set(self.last_index),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild counter for `guild_id` with the given last index.
pub async fn create_guild_counter(
    db: &DatabaseConnection,
    guild_id: &str,
    last_index: i64,
) -> Result<entity::guild_counter::Model, DbErr> {
    GuildCounterFactory::new(db)
        .guild_id(guild_id)
        .last_index(last_index)
        .build()
        .await
}
