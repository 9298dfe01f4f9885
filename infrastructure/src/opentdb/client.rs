//! HTTP client for the Open Trivia Database

use super::decode::decode_response;
use super::error::OpenTdbError;
use crate::config::FileSourceConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use trivia_application::{QuestionSource, SourceError};
use trivia_domain::{DecodeError, Question, QuestionQuery};

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com/api.php";

/// Fixed wait between attempts while rate limited
pub const DEFAULT_RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(1);

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("trivia-notify/", env!("CARGO_PKG_VERSION"));

/// Question source backed by the Open Trivia Database
///
/// Stateless apart from the reused `reqwest::Client`; nothing is cached.
#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    client: reqwest::Client,
    base_url: String,
    rate_limit_backoff: Duration,
}

impl OpenTdbClient {
    /// Create a client for the public endpoint
    pub fn new() -> Result<Self, OpenTdbError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, OpenTdbError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit_backoff: DEFAULT_RATE_LIMIT_BACKOFF,
        })
    }

    /// Create a client from the `[source]` config section
    pub fn from_config(config: &FileSourceConfig) -> Result<Self, OpenTdbError> {
        Ok(Self::with_timeout(Duration::from_secs(config.timeout_seconds))?
            .with_base_url(config.base_url.clone())
            .with_rate_limit_backoff(Duration::from_millis(config.rate_limit_backoff_ms)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rate_limit_backoff(mut self, backoff: Duration) -> Self {
        self.rate_limit_backoff = backoff;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one batch of questions
    ///
    /// HTTP 429 is retried after a fixed backoff, without limit. Every other
    /// failure is returned on the first occurrence.
    pub async fn get_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, OpenTdbError> {
        let params = query.to_params();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            match self.request(&params).await {
                Err(OpenTdbError::RateLimited) => {
                    warn!(
                        "Rate limited by question provider (attempt {}), retrying in {:?}",
                        attempt, self.rate_limit_backoff
                    );
                    tokio::time::sleep(self.rate_limit_backoff).await;
                }
                Ok(questions) => {
                    debug!(
                        "Fetched {} questions after {} attempt(s)",
                        questions.len(),
                        attempt
                    );
                    return Ok(questions);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn request(&self, params: &[(&str, String)]) -> Result<Vec<Question>, OpenTdbError> {
        debug!("GET {} {:?}", self.base_url, params);

        let response = self.client.get(&self.base_url).query(params).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenTdbError::RateLimited);
        }
        if !status.is_success() {
            return Err(OpenTdbError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

        Ok(decode_response(&json)?)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch(&self, query: &QuestionQuery) -> Result<Vec<Question>, SourceError> {
        self.get_questions(query).await.map_err(SourceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = OpenTdbClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.rate_limit_backoff, DEFAULT_RATE_LIMIT_BACKOFF);
    }

    #[test]
    fn test_from_config() {
        let config = FileSourceConfig {
            base_url: "http://localhost:9999/api.php".to_string(),
            rate_limit_backoff_ms: 250,
            ..Default::default()
        };
        let client = OpenTdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api.php");
        assert_eq!(client.rate_limit_backoff, Duration::from_millis(250));
    }
}
