//! Application-level configuration.
//!
//! - [`TriviaConfig`]: interaction pacing and the query used to refill the pool

pub mod trivia_config;

pub use trivia_config::TriviaConfig;
