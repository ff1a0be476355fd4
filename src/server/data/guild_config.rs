use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the confession channel of a guild
    ///
    /// Creates the config row if missing. Changing the channel clears the live
    /// controls message, since that message belongs to the old channel.
    ///
    /// # Arguments
    /// - `guild_id`: Guild being configured
    /// - `channel_id`: Channel confessions are posted to
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored config
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<entity::guild_config::Model, DbErr> {
        entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            live_message_id: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::ChannelId,
                    entity::guild_config::Column::LiveMessageId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds the config of a guild
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Guild has a confession channel
    /// - `Ok(None)`: Guild was never configured
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    /// Moves the live submit controls pointer from `expected` to `message_id`
    ///
    /// The update only applies while the stored pointer still equals `expected`, so of
    /// two submissions that read the same pointer exactly one moves it.
    ///
    /// # Arguments
    /// - `guild_id`: Guild whose pointer is moved
    /// - `expected`: Pointer value read before the swap
    /// - `message_id`: Message now carrying the live controls
    ///
    /// # Returns
    /// - `Ok(true)`: Pointer moved
    /// - `Ok(false)`: Pointer changed since it was read, or the guild has no config
    /// - `Err(DbErr)`: Database error
    pub async fn swap_live_message(
        &self,
        guild_id: u64,
        expected: Option<u64>,
        message_id: u64,
    ) -> Result<bool, DbErr> {
        let unchanged = match expected {
            Some(id) => entity::guild_config::Column::LiveMessageId.eq(id.to_string()),
            None => entity::guild_config::Column::LiveMessageId.is_null(),
        };

        let result = entity::prelude::GuildConfig::update_many()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .filter(unchanged)
            .col_expr(
                entity::guild_config::Column::LiveMessageId,
                sea_orm::sea_query::Expr::value(Some(message_id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
