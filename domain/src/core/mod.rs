//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DecodeError`]: why a provider payload could not become a question

pub mod error;
