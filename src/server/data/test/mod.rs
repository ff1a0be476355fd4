mod confession_map;
mod guild_config;
mod guild_counter;
mod log_config;
