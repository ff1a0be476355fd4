use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::confession::SaveConfessionParam;

pub struct ConfessionMapRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfessionMapRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records where an index was posted
    ///
    /// Upserts by `(guild_id, confession_index)`; re-saving an index after an admin
    /// counter reset overwrites the old location.
    ///
    /// # Arguments
    /// - `param`: Index, posted location, kind and submitted text
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored row
    /// - `Err(DbErr)`: Database error
    pub async fn save(
        &self,
        param: SaveConfessionParam,
    ) -> Result<entity::confession_map::Model, DbErr> {
        entity::prelude::ConfessionMap::insert(entity::confession_map::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            confession_index: ActiveValue::Set(param.index),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            kind: ActiveValue::Set(Some(param.kind.as_str().to_string())),
            content: ActiveValue::Set(Some(param.content)),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::confession_map::Column::GuildId,
                entity::confession_map::Column::ConfessionIndex,
            ])
            .update_columns([
                entity::confession_map::Column::ChannelId,
                entity::confession_map::Column::MessageId,
                entity::confession_map::Column::Kind,
                entity::confession_map::Column::Content,
                entity::confession_map::Column::CreatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds the row of a guild-scoped index
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Index was posted
    /// - `Ok(None)`: No such index in this guild
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_index(
        &self,
        guild_id: u64,
        index: i64,
    ) -> Result<Option<entity::confession_map::Model>, DbErr> {
        entity::prelude::ConfessionMap::find()
            .filter(entity::confession_map::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::confession_map::Column::ConfessionIndex.eq(index))
            .one(self.db)
            .await
    }

    /// Finds the row that was posted as `message_id`
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Message is a recorded confession or reply
    /// - `Ok(None)`: Message is unknown to the map
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_message_id(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<entity::confession_map::Model>, DbErr> {
        entity::prelude::ConfessionMap::find()
            .filter(entity::confession_map::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::confession_map::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// Counts the recorded indices of a guild
    #[cfg(test)]
    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::ConfessionMap::find()
            .filter(entity::confession_map::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }
}
