//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! stored guild configuration, the confession index map, submissions, and the shapes
//! exchanged with the chat platform. Domain models are converted from entity models at
//! the repository boundary, where stored string snowflakes become `u64`.

pub mod confession;
pub mod guild_config;
pub mod log_config;
pub mod platform;
pub mod submission;
