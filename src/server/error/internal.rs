use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Snowflakes are stored as strings; a row that fails to parse back into a `u64`
    /// means the stored data is corrupt. The user sees a generic failure message.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A required command option or modal input was absent.
    ///
    /// Discord enforces required options, so this means the registered command and the
    /// handler disagree.
    #[error("Interaction '{interaction}' is missing required input '{input}'")]
    MissingInput {
        /// Command name or modal custom id
        interaction: String,
        /// Name of the absent option or input
        input: &'static str,
    },
}
