//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_message;
//!
//! // A confession post with a thread started from it
//! let message = create_test_message(
//!     200,
//!     300,
//!     Some(("Anonymous Confession (#1)", "\"hello\"")),
//!     Some(300),
//! );
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;

pub use message::create_test_message;
