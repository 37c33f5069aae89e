/// Error types for the timeline core
use thiserror::Error;

/// Failure to parse the text form of a selection event
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseEventError {
    /// No `=value` part, or a value that cannot be empty
    #[error("Missing value in selection event: '{0}'")]
    MissingValue(String),

    /// The level is not one of decade, year or department
    #[error("Unknown selection level: '{0}'")]
    UnknownLevel(String),

    /// The year is not an integer
    #[error("Invalid year: '{0}'")]
    InvalidYear(String),
}
