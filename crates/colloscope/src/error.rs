//! Error types for loading a colloscope and building calendars from it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColloscopeError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A record points at an id that does not exist.
    #[error("Unknown {kind} id {id}")]
    UnknownReference { kind: &'static str, id: u64 },

    #[error("Invalid Monday date '{0}' (expected dd/mm)")]
    InvalidMonday(String),

    /// The local start time does not exist in the configured zone.
    #[error("Invalid local time {0} in {1}")]
    InvalidLocalTime(String, String),

    /// A colle time or duration that cannot be represented.
    #[error("Out-of-range {0} in colle {1}")]
    OutOfRange(&'static str, String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ColloscopeError>;
