//! Question event port
//!
//! The question manager announces two events:
//!
//! - **asked**: a question was pulled from the pool and should be shown
//! - **answered**: the user answered a question for the first time
//!
//! Listeners are called synchronously, in subscription order, before the
//! manager call that triggered the event returns. A listener runs inline with
//! the manager, so it must not block.
//!
//! # Built-in Implementations
//!
//! - [`ChannelEventListener`] - forwards owned [`QuestionEvent`]s into an
//!   unbounded channel for a consumer running elsewhere

use tokio::sync::mpsc;
use tracing::debug;
use trivia_domain::{AnsweredQuestion, Question};

/// Owned form of a manager event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionEvent {
    Asked(Question),
    Answered(AnsweredQuestion),
}

/// Callback for question manager events
///
/// Implementations live in the presentation layer (rendering a prompt,
/// showing the result) or in tests.
pub trait QuestionEventListener: Send + Sync {
    /// Called when a question is asked
    fn on_question_asked(&self, _question: &Question) {}

    /// Called when a question is answered for the first time
    fn on_question_answered(&self, _answered: &AnsweredQuestion) {}
}

/// Listener that forwards events into an unbounded channel
///
/// Sending never blocks, so the handler returns immediately. Events are
/// dropped once the receiving side is gone.
pub struct ChannelEventListener {
    sender: mpsc::UnboundedSender<QuestionEvent>,
}

impl ChannelEventListener {
    pub fn new(sender: mpsc::UnboundedSender<QuestionEvent>) -> Self {
        Self { sender }
    }

    /// Create a listener together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<QuestionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn forward(&self, event: QuestionEvent) {
        if self.sender.send(event).is_err() {
            debug!("Question event receiver dropped, discarding event");
        }
    }
}

impl QuestionEventListener for ChannelEventListener {
    fn on_question_asked(&self, question: &Question) {
        self.forward(QuestionEvent::Asked(question.clone()));
    }

    fn on_question_answered(&self, answered: &AnsweredQuestion) {
        self.forward(QuestionEvent::Answered(answered.clone()));
    }
}
