use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::log_config::UpsertLogConfigParam;

pub struct LogConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets where a guild's confessions are mirrored
    ///
    /// # Arguments
    /// - `param`: Source guild and target guild/channel
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored destination
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        param: UpsertLogConfigParam,
    ) -> Result<entity::log_config::Model, DbErr> {
        entity::prelude::LogConfig::insert(entity::log_config::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            target_guild_id: ActiveValue::Set(param.target_guild_id.to_string()),
            target_channel_id: ActiveValue::Set(param.target_channel_id.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::log_config::Column::GuildId)
                .update_columns([
                    entity::log_config::Column::TargetGuildId,
                    entity::log_config::Column::TargetChannelId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::log_config::Model>, DbErr> {
        entity::prelude::LogConfig::find()
            .filter(entity::log_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }
}
