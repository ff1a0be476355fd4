pub mod prelude;

pub mod confession_map;
pub mod guild_config;
pub mod guild_counter;
pub mod log_config;
