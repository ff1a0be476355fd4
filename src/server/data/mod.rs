//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally; the service layer converts
//! the returned models into domain models, so stored string snowflakes never leak past it.

pub mod confession_map;
pub mod guild_config;
pub mod guild_counter;
pub mod log_config;

#[cfg(test)]
mod test;
