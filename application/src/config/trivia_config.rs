//! Trivia runtime configuration.

use std::time::Duration;
use trivia_domain::QuestionQuery;

/// Default minimum spacing between asks
pub const DEFAULT_INTERACTION_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Default scheduler period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Controls how often questions are asked and which questions are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Minimum time between the last interaction and the next ask.
    pub interaction_interval: Duration,
    /// How often the scheduler wakes up to check the interval.
    pub tick_period: Duration,
    /// Query used whenever the pool runs dry.
    pub query: QuestionQuery,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            interaction_interval: DEFAULT_INTERACTION_INTERVAL,
            tick_period: DEFAULT_TICK_PERIOD,
            query: QuestionQuery::default(),
        }
    }
}

impl TriviaConfig {
    /// Oversized values saturate instead of wrapping
    pub fn with_interval_minutes(mut self, minutes: u64) -> Self {
        self.interaction_interval = Duration::from_secs(minutes.saturating_mul(60));
        self
    }

    pub fn with_tick_seconds(mut self, seconds: u64) -> Self {
        self.tick_period = Duration::from_secs(seconds);
        self
    }

    pub fn with_query(mut self, query: QuestionQuery) -> Self {
        self.query = query;
        self
    }
}
