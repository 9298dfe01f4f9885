//! Trivia domain.
//!
//! - [`entities::Question`]: an immutable trivia question with derived answers and id
//! - [`category::QuestionCategory`]: the provider's closed set of topics
//! - [`value_objects`]: difficulty, question type and [`value_objects::QuestionId`]
//! - [`query::QuestionQuery`]: what to ask the provider for

pub mod category;
pub mod entities;
pub mod query;
pub mod value_objects;
