//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! bot's interaction handlers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Routing confessions and replies, validating admin input
//! - **Orchestration**: Coordinating repository calls and the chat platform
//! - **Domain Models**: Working with domain models rather than entity models

pub mod confession;
pub mod guild_config;
pub mod platform;
