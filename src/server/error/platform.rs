use serenity::http::HttpError;
use thiserror::Error;

/// Discord JSON error code returned when a message already has a thread.
const THREAD_ALREADY_CREATED_CODE: isize = 160004;

/// Classified failure of an outbound chat platform call.
///
/// Only the cases the confession flow branches on get their own variant; everything
/// else (rate limits, permission denials, transport errors) stays a `Discord` error.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The channel or message does not exist or is not visible to the bot.
    #[error("Discord resource not found")]
    NotFound,

    /// A thread already exists for the message a thread was requested on.
    #[error("A thread has already been created for this message")]
    ThreadAlreadyExists,

    /// Any other Discord API error.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            if response.error.code == THREAD_ALREADY_CREATED_CODE {
                return PlatformError::ThreadAlreadyExists;
            }
            if response.status_code.as_u16() == 404 {
                return PlatformError::NotFound;
            }
        }

        PlatformError::Discord(Box::new(err))
    }
}
