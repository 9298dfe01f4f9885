//! Application layer for trivia-notify
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TriviaConfig;
pub use ports::{
    clock::{Clock, SystemClock},
    question_events::{ChannelEventListener, QuestionEvent, QuestionEventListener},
    question_source::{QuestionSource, SourceError},
};
pub use use_cases::question_manager::{ManagerError, QuestionManager};
pub use use_cases::run_trivia::{RunTriviaError, RunTriviaUseCase, UserResponse};
