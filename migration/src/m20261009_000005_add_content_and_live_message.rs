use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261001_000001_create_guild_config_table::GuildConfig;
use crate::m20261002_000004_create_confession_map_table::ConfessionMap;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rows written before this migration keep a NULL content
        manager
            .alter_table(
                Table::alter()
                    .table(ConfessionMap::Table)
                    .add_column(text_null(ConfessionMap::Content))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .add_column(string_null(GuildConfig::LiveMessageId))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .drop_column(GuildConfig::LiveMessageId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ConfessionMap::Table)
                    .drop_column(ConfessionMap::Content)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
