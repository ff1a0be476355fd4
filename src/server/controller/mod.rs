//! HTTP request handlers.
//!
//! The only HTTP surface is the uptime probe; everything user-facing goes through the
//! Discord gateway in `bot/`.

pub mod health;
