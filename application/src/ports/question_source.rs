//! Question source port
//!
//! Defines the interface for fetching trivia questions from a remote provider.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{DecodeError, Question, QuestionQuery};

/// Errors that can escape a question source
///
/// Rate limiting is not listed: sources retry it internally and callers
/// never observe it.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl SourceError {
    /// Check if the provider payload itself was the problem
    pub fn is_decode(&self) -> bool {
        matches!(self, SourceError::Decode(_))
    }
}

/// Source of trivia question batches
///
/// Every call is a live round trip; implementations do not cache.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one batch of questions matching `query`
    async fn fetch(&self, query: &QuestionQuery) -> Result<Vec<Question>, SourceError>;
}
