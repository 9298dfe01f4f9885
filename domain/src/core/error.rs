//! Domain error types

use thiserror::Error;

/// Errors raised while turning a provider payload into a [`Question`](crate::Question)
///
/// Decoding short-circuits on the first missing or invalid field; there is
/// no partial recovery of an entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Missing or null field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown question type: {0}")]
    UnknownType(String),

    #[error("No results in response (response_code: {})", response_code.map(|c| c.to_string()).unwrap_or_else(|| "???".to_string()))]
    MissingResults { response_code: Option<i64> },

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl DecodeError {
    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingField(field) | DecodeError::InvalidField { field, .. } => {
                Some(field)
            }
            DecodeError::UnknownCategory(_) => Some("category"),
            DecodeError::UnknownDifficulty(_) => Some("difficulty"),
            DecodeError::UnknownType(_) => Some("type"),
            DecodeError::MissingResults { .. } => Some("results"),
            DecodeError::InvalidJson(_) | DecodeError::InvalidQuestion(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_results_display() {
        let error = DecodeError::MissingResults {
            response_code: Some(2),
        };
        assert_eq!(error.to_string(), "No results in response (response_code: 2)");

        let error = DecodeError::MissingResults {
            response_code: None,
        };
        assert_eq!(
            error.to_string(),
            "No results in response (response_code: ???)"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(DecodeError::MissingField("question").field(), Some("question"));
        assert_eq!(
            DecodeError::UnknownCategory("Cooking".to_string()).field(),
            Some("category")
        );
        assert_eq!(DecodeError::InvalidQuestion("x".to_string()).field(), None);
    }
}
