//! Trivia value objects

use crate::core::error::DecodeError;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// How hard a question is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuestionDifficulty {
    /// Provider token, used both in payloads and as the `difficulty` query value
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionDifficulty::Easy => "easy",
            QuestionDifficulty::Medium => "medium",
            QuestionDifficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for QuestionDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QuestionDifficulty::Easy => "Easy",
            QuestionDifficulty::Medium => "Medium",
            QuestionDifficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for QuestionDifficulty {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(QuestionDifficulty::Easy),
            "medium" => Ok(QuestionDifficulty::Medium),
            "hard" => Ok(QuestionDifficulty::Hard),
            other => Err(DecodeError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Shape of the answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Four answers, one correct
    #[serde(rename = "multiple")]
    MultipleChoice,
    /// "True" / "False"
    #[serde(rename = "boolean")]
    TrueFalse,
}

impl QuestionType {
    /// Provider token, used both in payloads and as the `type` query value
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple",
            QuestionType::TrueFalse => "boolean",
        }
    }

    /// Number of incorrect answers the provider sends for this type
    pub fn incorrect_answer_count(&self) -> usize {
        match self {
            QuestionType::MultipleChoice => 3,
            QuestionType::TrueFalse => 1,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True / False",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for QuestionType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple" => Ok(QuestionType::MultipleChoice),
            "boolean" => Ok(QuestionType::TrueFalse),
            other => Err(DecodeError::UnknownType(other.to_string())),
        }
    }
}

/// Content-derived identity of a question (Value Object)
///
/// The first 8 bytes of SHA-256 over the question text and correct answer.
/// Deterministic across runs, so two fetches of the same question/answer
/// pair always collapse to the same id.
///
/// This is a narrow hash, not a full-content key: two different questions
/// may collide, in which case the second is treated as already seen. The
/// notification layer correlates user clicks back to pending questions with
/// this same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Compute the identity of a `(text, correct_answer)` pair
    pub fn compute(text: &str, correct_answer: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        // Unit separator, so ("ab", "c") and ("a", "bc") hash differently
        hasher.update([0x1f]);
        hasher.update(correct_answer.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(bytes))
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl std::str::FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

impl Serialize for QuestionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
