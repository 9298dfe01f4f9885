//! Infrastructure layer for trivia-notify
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod opentdb;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileScheduleConfig,
    FileSourceConfig,
};
pub use opentdb::{
    client::OpenTdbClient,
    decode::{decode_html_entities, decode_question, decode_response},
    error::OpenTdbError,
};
