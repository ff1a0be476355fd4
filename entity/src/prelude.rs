pub use super::confession_map::Entity as ConfessionMap;
pub use super::guild_config::Entity as GuildConfig;
pub use super::guild_counter::Entity as GuildCounter;
pub use super::log_config::Entity as LogConfig;
