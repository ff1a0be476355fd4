pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_guild_config_table;
mod m20261001_000002_create_guild_counter_table;
mod m20261001_000003_create_log_config_table;
mod m20261002_000004_create_confession_map_table;
mod m20261009_000005_add_content_and_live_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_guild_config_table::Migration),
            Box::new(m20261001_000002_create_guild_counter_table::Migration),
            Box::new(m20261001_000003_create_log_config_table::Migration),
            Box::new(m20261002_000004_create_confession_map_table::Migration),
            Box::new(m20261009_000005_add_content_and_live_message::Migration),
        ]
    }
}
