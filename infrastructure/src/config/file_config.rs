//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::opentdb::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use trivia_application::TriviaConfig;
use trivia_domain::{QuestionCategory, QuestionDifficulty, QuestionQuery, QuestionType};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("tick_seconds cannot be 0")]
    InvalidTickSeconds,

    #[error("amount must be between 1 and {max}, got {got}")]
    InvalidAmount { got: u32, max: u32 },

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("rate_limit_backoff_ms cannot be 0")]
    InvalidBackoff,

    #[error("base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Raw scheduling configuration from TOML (`[schedule]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScheduleConfig {
    /// Minimum minutes between asks
    pub interval_minutes: u64,
    /// Scheduler wake-up period in seconds
    pub tick_seconds: u64,
}

impl Default for FileScheduleConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 60,
            tick_seconds: 1,
        }
    }
}

/// Raw question source configuration from TOML (`[source]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// API endpoint
    pub base_url: String,
    /// Questions per batch
    pub amount: u32,
    /// Category filter, as the provider label
    pub category: Option<QuestionCategory>,
    /// Difficulty filter (easy, medium, hard)
    pub difficulty: Option<QuestionDifficulty>,
    /// Question type filter (multiple, boolean)
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Wait between attempts while rate limited
    pub rate_limit_backoff_ms: u64,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            amount: trivia_domain::trivia::query::DEFAULT_AMOUNT,
            category: None,
            difficulty: None,
            question_type: None,
            timeout_seconds: 30,
            rate_limit_backoff_ms: 1000,
        }
    }
}

impl FileSourceConfig {
    /// Build the refill query from this section
    pub fn to_query(&self) -> QuestionQuery {
        QuestionQuery {
            amount: self.amount,
            category: self.category,
            difficulty: self.difficulty,
            question_type: self.question_type,
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scheduling settings
    pub schedule: FileScheduleConfig,
    /// Question source settings
    pub source: FileSourceConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // A zero tick would spin the scheduler
        if self.schedule.tick_seconds == 0 {
            return Err(ConfigValidationError::InvalidTickSeconds);
        }

        let max = trivia_domain::trivia::query::MAX_AMOUNT;
        if self.source.amount == 0 || self.source.amount > max {
            return Err(ConfigValidationError::InvalidAmount {
                got: self.source.amount,
                max,
            });
        }

        if self.source.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.source.rate_limit_backoff_ms == 0 {
            return Err(ConfigValidationError::InvalidBackoff);
        }

        if self.source.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        Ok(())
    }

    /// Convert to the application-level configuration
    pub fn to_trivia_config(&self) -> TriviaConfig {
        TriviaConfig {
            interaction_interval: Duration::from_secs(
                self.schedule.interval_minutes.saturating_mul(60),
            ),
            tick_period: Duration::from_secs(self.schedule.tick_seconds),
            query: self.source.to_query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[schedule]
interval_minutes = 5
tick_seconds = 2

[source]
base_url = "http://localhost:8080/api.php"
amount = 25
category = "Science: Computers"
difficulty = "hard"
type = "boolean"
timeout_seconds = 10
rate_limit_backoff_ms = 500

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.schedule.interval_minutes, 5);
        assert_eq!(config.schedule.tick_seconds, 2);
        assert_eq!(config.source.base_url, "http://localhost:8080/api.php");
        assert_eq!(config.source.amount, 25);
        assert_eq!(
            config.source.category,
            Some(QuestionCategory::ScienceComputers)
        );
        assert_eq!(config.source.difficulty, Some(QuestionDifficulty::Hard));
        assert_eq!(config.source.question_type, Some(QuestionType::TrueFalse));
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.source.rate_limit_backoff_ms, 500);
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[schedule]
interval_minutes = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.schedule.interval_minutes, 1);
        // Defaults should apply
        assert_eq!(config.schedule.tick_seconds, 1);
        assert_eq!(config.source.amount, 10);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert!(config.source.category.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml_str = r#"
[source]
category = "Cooking"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = FileConfig::default();
        config.schedule.tick_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTickSeconds)
        ));

        let mut config = FileConfig::default();
        config.source.amount = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAmount { got: 0, .. })
        ));

        let mut config = FileConfig::default();
        config.source.amount = 51;
        assert!(config.validate().is_err());

        let mut config = FileConfig::default();
        config.source.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));

        let mut config = FileConfig::default();
        config.source.rate_limit_backoff_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBackoff)
        ));
    }

    #[test]
    fn test_huge_interval_does_not_overflow() {
        let mut config = FileConfig::default();
        config.schedule.interval_minutes = u64::MAX;

        assert!(config.validate().is_ok());
        assert_eq!(
            config.to_trivia_config().interaction_interval,
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    fn test_to_trivia_config() {
        let mut config = FileConfig::default();
        config.schedule.interval_minutes = 1;
        config.source.difficulty = Some(QuestionDifficulty::Easy);

        let trivia = config.to_trivia_config();
        assert_eq!(trivia.interaction_interval, Duration::from_secs(60));
        assert_eq!(trivia.tick_period, Duration::from_secs(1));
        assert_eq!(trivia.query.difficulty, Some(QuestionDifficulty::Easy));
        assert_eq!(trivia.query.amount, 10);
    }
}
