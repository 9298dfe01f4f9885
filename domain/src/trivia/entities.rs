//! Trivia domain entities

use super::category::QuestionCategory;
use super::value_objects::{QuestionDifficulty, QuestionId, QuestionType};
use crate::core::error::DecodeError;
use serde::Serialize;

/// A trivia question (Value Object)
///
/// Immutable once constructed. The display-ordered `answers` list and the
/// content-derived `id` are computed in [`Question::new`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    category: QuestionCategory,
    difficulty: QuestionDifficulty,
    #[serde(rename = "type")]
    question_type: QuestionType,
    text: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    answers: Vec<String>,
}

impl Question {
    /// Create a question, deriving its answer order and identity
    ///
    /// Fails if the text is blank, if the number of incorrect answers does
    /// not match the question type (3 for multiple choice, 1 for true/false),
    /// or if the correct answer also appears among the incorrect ones.
    pub fn new(
        category: QuestionCategory,
        difficulty: QuestionDifficulty,
        question_type: QuestionType,
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Result<Self, DecodeError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(DecodeError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }
        let expected = question_type.incorrect_answer_count();
        if incorrect_answers.len() != expected {
            return Err(DecodeError::InvalidField {
                field: "incorrect_answers",
                reason: format!(
                    "expected {} for {}, got {}",
                    expected,
                    question_type.as_str(),
                    incorrect_answers.len()
                ),
            });
        }
        if incorrect_answers.contains(&correct_answer) {
            return Err(DecodeError::InvalidQuestion(format!(
                "correct answer \"{}\" is also listed as incorrect",
                correct_answer
            )));
        }

        let answers = Self::display_order(question_type, &correct_answer, &incorrect_answers);
        let id = QuestionId::compute(&text, &correct_answer);

        Ok(Self {
            id,
            category,
            difficulty,
            question_type,
            text,
            correct_answer,
            incorrect_answers,
            answers,
        })
    }

    /// All answers sorted, then reversed for true/false so "True" comes first
    fn display_order(
        question_type: QuestionType,
        correct_answer: &str,
        incorrect_answers: &[String],
    ) -> Vec<String> {
        let mut answers: Vec<String> = std::iter::once(correct_answer.to_string())
            .chain(incorrect_answers.iter().cloned())
            .collect();
        answers.sort();
        if question_type == QuestionType::TrueFalse {
            answers.reverse();
        }
        answers
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }

    pub fn difficulty(&self) -> QuestionDifficulty {
        self.difficulty
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    /// The prompt, already entity-decoded
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Answers in display order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Exact comparison against the correct answer
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A resolved question: what the user picked and whether it was right
///
/// Payload of the "answered" event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub answer: String,
    pub is_correct: bool,
}

impl AnsweredQuestion {
    pub fn new(question: Question, answer: impl Into<String>) -> Self {
        let answer = answer.into();
        let is_correct = question.is_correct(&answer);
        Self {
            question,
            answer,
            is_correct,
        }
    }
}
