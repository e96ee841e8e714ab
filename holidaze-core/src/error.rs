//! Error types for the Holidaze client.

use thiserror::Error;

/// Errors that can occur in Holidaze operations.
#[derive(Error, Debug)]
pub enum HolidazeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("You must be logged in to do that")]
    NotLoggedIn,

    /// The API refused the request (403).
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status with a structured `errors` payload.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-success status without a parseable body.
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Unexpected response from API: {0}")]
    Payload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HolidazeError {
    /// HTTP status of the failed request, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HolidazeError::Api { status, .. } => Some(*status),
            HolidazeError::Status(status) => Some(*status),
            HolidazeError::Forbidden(_) => Some(403),
            _ => None,
        }
    }
}

/// Result type alias for Holidaze operations.
pub type HolidazeResult<T> = Result<T, HolidazeError>;
