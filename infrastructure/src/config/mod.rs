//! Configuration file loading for trivia-notify
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIVIA_`-prefixed environment variables (`TRIVIA_SCHEDULE__INTERVAL_MINUTES=1`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. Global: `$XDG_CONFIG_HOME/trivia-notify/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileScheduleConfig, FileSourceConfig,
};
pub use loader::ConfigLoader;
