//! Turning typed lines into answers
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `1`..`N` | Answer with the N-th displayed answer |
//! | answer text | Answer with that text (case-insensitive) |
//! | empty, `s`, `skip` | Dismiss the question |

use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;
use tracing::debug;
use trivia_domain::Question;

/// What a line of user input means for the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    /// Answer with this exact answer text
    Answer(String),
    /// Close the question without answering
    Dismiss,
    /// Neither a valid choice nor a dismiss command
    Unrecognized,
}

/// Interpret `line` against the answers of `question`
pub fn parse_input(line: &str, question: &Question) -> ParsedInput {
    let input = line.trim();

    match input.to_lowercase().as_str() {
        "" | "s" | "skip" => return ParsedInput::Dismiss,
        _ => {}
    }

    let answers = question.answers();

    if let Ok(choice) = input.parse::<usize>() {
        return match choice.checked_sub(1).and_then(|i| answers.get(i)) {
            Some(answer) => ParsedInput::Answer(answer.clone()),
            None => ParsedInput::Unrecognized,
        };
    }

    answers
        .iter()
        .find(|answer| answer.eq_ignore_ascii_case(input))
        .map(|answer| ParsedInput::Answer(answer.clone()))
        .unwrap_or(ParsedInput::Unrecognized)
}

/// Read stdin lines on a dedicated thread
///
/// A blocking thread is used instead of `tokio::io::stdin` so that a pending
/// read never holds up runtime shutdown. The channel closes on EOF or on a
/// read error.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        debug!("Stdin reader finished");
    });

    rx
}
