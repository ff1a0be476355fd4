//! Error types and user-facing failure messages.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type returned by services and handlers; it wraps domain-specific
//! errors and knows how to turn itself into the single line shown to a Discord user.
//! Detailed errors are logged where they are caught, never shown to users.

pub mod config;
pub mod confession;
pub mod internal;
pub mod platform;

use thiserror::Error;

use crate::server::error::{
    config::ConfigError, confession::ConfessionError, internal::InternalError,
    platform::PlatformError,
};

/// Generic reply used for any failure that is not part of the confession taxonomy.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A submission or reply could not be routed.
    ///
    /// These carry a message meant for the submitting user.
    #[error(transparent)]
    ConfessionErr(#[from] ConfessionError),

    /// Classified failure of an outbound chat platform call.
    #[error(transparent)]
    PlatformErr(#[from] PlatformError),

    /// Internal issue with stored data or the codebase.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, e.g. binding the health endpoint listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the text shown to the user whose interaction failed.
    ///
    /// Confession errors describe what went wrong with the submission; every other
    /// variant collapses to [`GENERIC_FAILURE_MESSAGE`] so store and transport details
    /// stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfessionErr(err) => err.user_message(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confession_errors_keep_their_message() {
        let err = AppError::from(ConfessionError::IndexNotFound(42));
        assert_eq!(err.user_message(), "Error: Confession #42 not found in database.");
    }

    #[test]
    fn store_errors_collapse_to_generic_message() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk on fire".to_string()));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn platform_errors_collapse_to_generic_message() {
        let err = AppError::from(PlatformError::NotFound);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
