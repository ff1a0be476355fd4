use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfessionMap::Table)
                    .if_not_exists()
                    .col(string(ConfessionMap::GuildId))
                    .col(big_integer(ConfessionMap::ConfessionIndex))
                    .col(string(ConfessionMap::ChannelId))
                    .col(string(ConfessionMap::MessageId))
                    .col(string_null(ConfessionMap::Kind))
                    .col(
                        timestamp(ConfessionMap::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ConfessionMap::GuildId)
                            .col(ConfessionMap::ConfessionIndex),
                    )
                    .to_owned(),
            )
            .await?;

        // Reply targets given as message links are looked up by message id
        manager
            .create_index(
                Index::create()
                    .name("idx_confession_map_guild_message")
                    .table(ConfessionMap::Table)
                    .col(ConfessionMap::GuildId)
                    .col(ConfessionMap::MessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_confession_map_guild_message")
                    .table(ConfessionMap::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ConfessionMap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfessionMap {
    Table,
    GuildId,
    ConfessionIndex,
    ChannelId,
    MessageId,
    Kind,
    Content,
    CreatedAt,
}
