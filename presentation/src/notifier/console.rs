//! Terminal notifier
//!
//! Consumes [`QuestionEvent`]s, prints prompts and results, and sends the
//! user's choices back to the trivia loop as [`UserResponse`]s.

use super::input::{ParsedInput, parse_input};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use trivia_application::{QuestionEvent, UserResponse};
use trivia_domain::Question;

/// Shows questions in the terminal and captures answers from typed lines
///
/// Several questions can be pending at once if the user leaves a prompt
/// unanswered past the next interval. Input always applies to the most
/// recently asked one.
pub struct ConsoleNotifier {
    responses: mpsc::UnboundedSender<UserResponse>,
    pending: Vec<Question>,
}

impl ConsoleNotifier {
    pub fn new(responses: mpsc::UnboundedSender<UserResponse>) -> Self {
        Self {
            responses,
            pending: Vec::new(),
        }
    }

    /// Questions shown but not yet answered or dismissed, oldest first
    pub fn pending(&self) -> &[Question] {
        &self.pending
    }

    /// Run until cancelled, until the event stream ends, or until the trivia
    /// loop stops accepting responses
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<QuestionEvent>,
        mut input: mpsc::UnboundedReceiver<String>,
        token: CancellationToken,
    ) {
        let mut input_open = true;

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => break,

                event = events.recv() => match event {
                    Some(event) => Self::print(&self.handle_event(event)),
                    None => {
                        debug!("Question event stream closed");
                        break;
                    }
                },

                line = input.recv(), if input_open => match line {
                    Some(line) => match self.handle_line(&line) {
                        Ok(output) => {
                            if let Some(output) = output {
                                Self::print(&output);
                            }
                        }
                        Err(_) => {
                            debug!("Trivia loop stopped accepting responses");
                            break;
                        }
                    },
                    None => {
                        debug!("Input closed, questions can no longer be answered");
                        input_open = false;
                    }
                },
            }
        }
    }

    /// Track and render an event from the question manager
    pub fn handle_event(&mut self, event: QuestionEvent) -> String {
        match event {
            QuestionEvent::Asked(question) => {
                let output = ConsoleFormatter::format_prompt(&question);
                self.pending.retain(|q| q.id() != question.id());
                self.pending.push(question);
                output
            }
            QuestionEvent::Answered(answered) => {
                self.pending.retain(|q| q.id() != answered.question.id());
                ConsoleFormatter::format_result(&answered)
            }
        }
    }

    /// Apply a typed line to the most recent pending question
    ///
    /// Returns the text to show the user, if any. Fails only when the
    /// response channel is closed.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Result<Option<String>, mpsc::error::SendError<UserResponse>> {
        let Some(question) = self.pending.last() else {
            if line.trim().is_empty() {
                return Ok(None);
            }
            return Ok(Some(format!("{}\n", "No question right now.".dimmed())));
        };
        let parsed = parse_input(line, question);
        let choices = question.answers().len();

        match parsed {
            ParsedInput::Answer(answer) => {
                if let Some(question) = self.pending.pop() {
                    self.responses
                        .send(UserResponse::Answer { question, answer })?;
                }
                Ok(None)
            }
            ParsedInput::Dismiss => {
                if let Some(question) = self.pending.pop() {
                    self.responses.send(UserResponse::Dismiss { question })?;
                }
                Ok(Some(format!("{}\n", "Dismissed.".dimmed())))
            }
            ParsedInput::Unrecognized => Ok(Some(format!(
                "{}\n",
                format!(
                    "Please type a number from 1 to {}, or press Enter to dismiss.",
                    choices
                )
                .yellow()
            ))),
        }
    }

    fn print(output: &str) {
        print!("{}", output);
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{AnsweredQuestion, QuestionCategory, QuestionDifficulty, QuestionType};

    fn question(text: &str, correct: &str) -> Question {
        Question::new(
            QuestionCategory::GeneralKnowledge,
            QuestionDifficulty::Medium,
            QuestionType::MultipleChoice,
            text,
            correct,
            vec!["Rome".to_string(), "Madrid".to_string(), "Berlin".to_string()],
        )
        .unwrap()
    }

    fn notifier() -> (ConsoleNotifier, mpsc::UnboundedReceiver<UserResponse>) {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        (ConsoleNotifier::new(response_tx), response_rx)
    }

    #[test]
    fn test_asked_question_becomes_pending() {
        let (mut notifier, _responses) = notifier();
        let q = question("Capital of France?", "Paris");

        let output = notifier.handle_event(QuestionEvent::Asked(q.clone()));

        assert!(output.contains("Capital of France?"));
        assert_eq!(notifier.pending(), &[q]);
    }

    #[test]
    fn test_reasked_question_is_not_duplicated() {
        let (mut notifier, _responses) = notifier();
        let a = question("Capital of France?", "Paris");
        let b = question("Capital of Austria?", "Vienna");

        notifier.handle_event(QuestionEvent::Asked(a.clone()));
        notifier.handle_event(QuestionEvent::Asked(b.clone()));
        notifier.handle_event(QuestionEvent::Asked(a.clone()));

        assert_eq!(notifier.pending(), &[b, a]);
    }

    #[test]
    fn test_number_sends_answer_for_latest_question() {
        let (mut notifier, mut responses) = notifier();
        let older = question("Capital of Austria?", "Vienna");
        let latest = question("Capital of France?", "Paris");
        notifier.handle_event(QuestionEvent::Asked(older.clone()));
        notifier.handle_event(QuestionEvent::Asked(latest.clone()));

        // Berlin, Madrid, Paris, Rome
        let output = notifier.handle_line("3").unwrap();

        assert!(output.is_none());
        assert_eq!(
            responses.try_recv().unwrap(),
            UserResponse::Answer {
                question: latest,
                answer: "Paris".to_string(),
            }
        );
        assert_eq!(notifier.pending(), &[older]);
    }

    #[test]
    fn test_empty_line_dismisses() {
        let (mut notifier, mut responses) = notifier();
        let q = question("Capital of France?", "Paris");
        notifier.handle_event(QuestionEvent::Asked(q.clone()));

        let output = notifier.handle_line("").unwrap();

        assert!(output.unwrap().contains("Dismissed."));
        assert_eq!(
            responses.try_recv().unwrap(),
            UserResponse::Dismiss { question: q }
        );
        assert!(notifier.pending().is_empty());
    }

    #[test]
    fn test_unrecognized_input_keeps_question_pending() {
        let (mut notifier, mut responses) = notifier();
        let q = question("Capital of France?", "Paris");
        notifier.handle_event(QuestionEvent::Asked(q.clone()));

        let output = notifier.handle_line("42").unwrap();

        assert!(output.unwrap().contains("1 to 4"));
        assert!(responses.try_recv().is_err());
        assert_eq!(notifier.pending(), &[q]);
    }

    #[test]
    fn test_input_without_pending_question() {
        let (mut notifier, mut responses) = notifier();

        assert!(notifier.handle_line("").unwrap().is_none());
        assert!(notifier.handle_line("1").unwrap().is_some());
        assert!(responses.try_recv().is_err());
    }

    #[test]
    fn test_answered_event_shows_result() {
        let (mut notifier, _responses) = notifier();
        let q = question("Capital of France?", "Paris");
        notifier.handle_event(QuestionEvent::Asked(q.clone()));

        let output = notifier.handle_event(QuestionEvent::Answered(AnsweredQuestion::new(
            q, "Rome",
        )));

        assert!(output.contains("Incorrect!"));
        assert!(output.contains("Paris"));
        assert!(notifier.pending().is_empty());
    }

    #[test]
    fn test_closed_response_channel_is_an_error() {
        let (mut notifier, responses) = notifier();
        notifier.handle_event(QuestionEvent::Asked(question("Capital of France?", "Paris")));
        drop(responses);

        assert!(notifier.handle_line("1").is_err());
    }

    #[tokio::test]
    async fn test_run_stops_when_events_end() {
        let (notifier, _responses) = notifier();
        let (events, event_rx) = mpsc::unbounded_channel();
        let (_input, input_rx) = mpsc::unbounded_channel();
        events
            .send(QuestionEvent::Asked(question("Capital of France?", "Paris")))
            .unwrap();
        drop(events);

        notifier
            .run(event_rx, input_rx, CancellationToken::new())
            .await;
    }

    #[tokio::test]
    async fn test_run_forwards_typed_answer() {
        let (notifier, mut responses) = notifier();
        let (events, event_rx) = mpsc::unbounded_channel();
        let (input, input_rx) = mpsc::unbounded_channel();
        let q = question("Capital of France?", "Paris");
        events.send(QuestionEvent::Asked(q.clone())).unwrap();
        input.send("Paris".to_string()).unwrap();

        let token = CancellationToken::new();
        let handle = tokio::spawn(notifier.run(event_rx, input_rx, token.clone()));

        let response = responses.recv().await.unwrap();
        assert_eq!(
            response,
            UserResponse::Answer {
                question: q,
                answer: "Paris".to_string(),
            }
        );

        token.cancel();
        handle.await.unwrap();
    }
}
