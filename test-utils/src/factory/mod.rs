//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let config = factory::create_guild_config(&db).await?;
//!
//! // Using builder pattern for customization
//! let row = factory::confession_map::ConfessionMapFactory::new(&db)
//!     .guild_id(&config.guild_id)
//!     .index(7)
//!     .content("hello")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Confession channel per guild
//! - `guild_counter` - Confession counter per guild
//! - `log_config` - Moderator log destination per guild
//! - `confession_map` - Index to message mapping rows
//! - `helpers` - Shared ID generation

pub mod confession_map;
pub mod guild_config;
pub mod guild_counter;
pub mod helpers;
pub mod log_config;

pub use confession_map::create_confession;
pub use guild_config::create_guild_config;
pub use guild_counter::create_guild_counter;
pub use log_config::create_log_config;
