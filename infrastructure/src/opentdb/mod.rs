//! **Open Trivia Database** adapter
//!
//! Implements [`QuestionSource`](trivia_application::QuestionSource) against
//! the public API at `https://opentdb.com/api.php`.
//!
//! # Request
//!
//! One `GET` per fetch, with query parameters built from
//! [`QuestionQuery`](trivia_domain::QuestionQuery):
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `amount` | batch size (always sent) |
//! | `category` | integer code, e.g. `15` for "Entertainment: Video Games" |
//! | `difficulty` | `easy` / `medium` / `hard` |
//! | `type` | `multiple` / `boolean` |
//!
//! # Rate limiting
//!
//! The provider answers `429 Too Many Requests` when called too often. The
//! client sleeps a fixed backoff (1 second) and resends the same request,
//! with no attempt limit. Any other failure is returned immediately.
//!
//! # Response
//!
//! ```json
//! {
//!   "response_code": 0,
//!   "results": [{
//!     "category": "Science: Computers",
//!     "type": "multiple",
//!     "difficulty": "easy",
//!     "question": "What does CPU stand for?",
//!     "correct_answer": "Central Processing Unit",
//!     "incorrect_answers": ["...", "...", "..."]
//!   }]
//! }
//! ```
//!
//! Every string is HTML-entity encoded by the provider and decoded here.

pub mod client;
pub mod decode;
pub mod error;
