//! Discord gateway integration.
//!
//! This module connects the bot to Discord and turns gateway events into calls on the
//! confession services. Slash commands are registered globally when the bot becomes
//! ready; their invocations, button presses and modal submissions all arrive through
//! the `interaction_create` event and are routed by the handler.
//!
//! The bot runs in its own tokio task alongside the health server. Every interaction is
//! handled independently and may run concurrently with others.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data, including threads
//! - `GUILD_MESSAGES` - Messages in guild channels
//!
//! Neither is privileged. Message content is never read from the gateway: confession
//! text only arrives through command options and modal inputs.

pub mod command;
pub mod component;
pub mod handler;
pub mod modal;
pub mod start;
