use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

pub struct GuildCounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildCounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocates the next confession index of a guild
    ///
    /// A single `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` statement, so concurrent
    /// callers always receive distinct values. The first allocation for a guild is 1.
    ///
    /// # Arguments
    /// - `guild_id`: Guild whose counter is incremented
    ///
    /// # Returns
    /// - `Ok(i64)`: The newly allocated index
    /// - `Err(DbErr)`: Database error
    pub async fn allocate_next(&self, guild_id: u64) -> Result<i64, DbErr> {
        let counter = entity::prelude::GuildCounter::insert(entity::guild_counter::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            last_index: ActiveValue::Set(1),
        })
        .on_conflict(
            OnConflict::column(entity::guild_counter::Column::GuildId)
                .value(
                    entity::guild_counter::Column::LastIndex,
                    Expr::col(entity::guild_counter::Column::LastIndex).add(1),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(counter.last_index)
    }

    /// Makes the next allocation for a guild return `next_index`
    ///
    /// Stores `next_index - 1` as the last handed-out value. Callers validate that
    /// `next_index` is positive.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored counter
    /// - `Err(DbErr)`: Database error
    pub async fn set_next_index(
        &self,
        guild_id: u64,
        next_index: i64,
    ) -> Result<entity::guild_counter::Model, DbErr> {
        entity::prelude::GuildCounter::insert(entity::guild_counter::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            last_index: ActiveValue::Set(next_index - 1),
        })
        .on_conflict(
            OnConflict::column(entity::guild_counter::Column::GuildId)
                .update_column(entity::guild_counter::Column::LastIndex)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the last index handed out for a guild
    ///
    /// # Returns
    /// - `Ok(Some(i64))`: Last allocated (or admin-seeded) value
    /// - `Ok(None)`: Guild never allocated an index
    /// - `Err(DbErr)`: Database error
    #[cfg(test)]
    pub async fn find_last_index(&self, guild_id: u64) -> Result<Option<i64>, DbErr> {
        use sea_orm::{ColumnTrait, QueryFilter};

        let counter = entity::prelude::GuildCounter::find()
            .filter(entity::guild_counter::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(counter.map(|c| c.last_index))
    }
}
