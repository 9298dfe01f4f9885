//! Error types for the Open Trivia Database adapter

use thiserror::Error;
use trivia_application::SourceError;
use trivia_domain::DecodeError;

/// Errors that can occur when talking to the Open Trivia Database
#[derive(Error, Debug)]
pub enum OpenTdbError {
    /// HTTP 429; retried inside the client and never returned from a fetch
    #[error("Rate limited by question provider")]
    RateLimited,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),
}

impl From<OpenTdbError> for SourceError {
    fn from(error: OpenTdbError) -> Self {
        match error {
            OpenTdbError::RateLimited => SourceError::Status { status: 429 },
            OpenTdbError::Transport(e) => SourceError::Transport(e.to_string()),
            OpenTdbError::Status { status } => SourceError::Status { status },
            OpenTdbError::Decode(e) => SourceError::Decode(e),
        }
    }
}
