use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogConfig::Table)
                    .if_not_exists()
                    .col(string(LogConfig::GuildId).primary_key())
                    .col(string(LogConfig::TargetGuildId))
                    .col(string(LogConfig::TargetChannelId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LogConfig {
    Table,
    GuildId,
    TargetGuildId,
    TargetChannelId,
}
