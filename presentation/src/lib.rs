//! Presentation layer for trivia-notify
//!
//! This crate contains the CLI definition, console output formatting,
//! and the console notifier that shows questions and captures answers.

pub mod cli;
pub mod notifier;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use notifier::console::ConsoleNotifier;
pub use notifier::input::{parse_input, spawn_stdin_reader};
pub use output::console::ConsoleFormatter;
