//! Console notification layer
//!
//! Stands in for desktop toasts: renders "asked" and "answered" events in the
//! terminal and turns typed input back into [`UserResponse`]s.
//!
//! [`UserResponse`]: trivia_application::UserResponse

pub mod console;
pub mod input;
