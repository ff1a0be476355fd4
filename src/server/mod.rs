//! Bot service, business logic and data access.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handling, slash commands, buttons and modals
//! - **Controller Layer** (`controller/`) - HTTP handlers for the uptime probe
//! - **Service Layer** (`service/`) - Confession routing and guild configuration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection)
//! - **Startup** (`startup`) - Database connection, migrations and health listener
//! - **Router** (`router`) - Axum route configuration
//!
//! # Interaction Flow
//!
//! A typical submission flows through these layers:
//!
//! 1. **Bot** receives the interaction and defers it ephemerally
//! 2. **Service** checks the guild configuration and resolves the reply target
//! 3. **Data** allocates the next confession index
//! 4. **Service** posts through the chat platform and records the post
//! 5. **Bot** edits the deferred response with the outcome

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
