use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord ids are written by the bot itself, so a value that fails
    /// to parse points at a corrupted row or a bad manual edit.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Requested a time display granularity outside of 1..=7
    #[error("Granularity must be between 7 and 1, got {0}")]
    InvalidGranularity(usize),
}
