//! Domain layer for trivia-notify
//!
//! This crate contains the trivia question model and its value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A [`Question`] is an immutable value decoded from the trivia provider:
//! a prompt, one correct answer, and the incorrect alternatives. The
//! display-ordered answer list and the [`QuestionId`] are derived once at
//! construction.
//!
//! ## Identity
//!
//! [`QuestionId`] is a narrow content hash of the question text and its
//! correct answer. Two fetches of the same question collapse to the same id,
//! which is what the question manager deduplicates on.

pub mod core;
pub mod trivia;

// Re-export commonly used types
pub use core::error::DecodeError;
pub use trivia::{
    category::QuestionCategory,
    entities::{AnsweredQuestion, Question},
    query::QuestionQuery,
    value_objects::{QuestionDifficulty, QuestionId, QuestionType},
};
