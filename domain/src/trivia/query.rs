//! Question query value object

use super::category::QuestionCategory;
use super::value_objects::{QuestionDifficulty, QuestionType};
use serde::{Deserialize, Serialize};

/// Default number of questions per batch
pub const DEFAULT_AMOUNT: u32 = 10;

/// Largest batch the provider serves in one request
pub const MAX_AMOUNT: u32 = 50;

/// What to request from the question provider
///
/// Absent filters are left out of the request, so the provider picks "any".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionQuery {
    pub amount: u32,
    pub category: Option<QuestionCategory>,
    pub difficulty: Option<QuestionDifficulty>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            category: None,
            difficulty: None,
            question_type: None,
        }
    }
}

impl QuestionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size, clamped to `1..=MAX_AMOUNT`
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount.clamp(1, MAX_AMOUNT);
        self
    }

    pub fn with_category(mut self, category: QuestionCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_difficulty(mut self, difficulty: QuestionDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    /// Query parameters in request order, omitting unset filters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("amount", self.amount.to_string())];
        if let Some(category) = self.category {
            params.push(("category", category.code().to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(question_type) = self.question_type {
            params.push(("type", question_type.as_str().to_string()));
        }
        params
    }
}
