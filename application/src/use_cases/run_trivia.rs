//! Run Trivia use case
//!
//! Drives a [`QuestionManager`] from a single task: a periodic tick, plus the
//! answers and dismissals coming back from the notification layer. Keeping
//! both on one task is what lets the manager stay lock-free.

use crate::ports::question_source::QuestionSource;
use crate::use_cases::question_manager::{ManagerError, QuestionManager};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use trivia_domain::Question;

/// Errors that end the trivia loop
#[derive(Error, Debug)]
pub enum RunTriviaError {
    #[error("Question manager error: {0}")]
    Manager(#[from] ManagerError),
}

/// The user's reaction to an asked question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    /// The user picked one of the answers
    Answer { question: Question, answer: String },
    /// The user closed the prompt without answering
    Dismiss { question: Question },
}

/// Use case for running the periodic trivia loop
pub struct RunTriviaUseCase<S: QuestionSource + 'static> {
    manager: QuestionManager<S>,
    tick_period: Duration,
    cancellation_token: Option<CancellationToken>,
}

impl<S: QuestionSource + 'static> RunTriviaUseCase<S> {
    pub fn new(manager: QuestionManager<S>, tick_period: Duration) -> Self {
        Self {
            manager,
            tick_period,
            cancellation_token: None,
        }
    }

    /// Stop the loop when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn manager(&self) -> &QuestionManager<S> {
        &self.manager
    }

    /// Run until cancelled or until the manager fails
    ///
    /// Cancellation returns `Ok(())`, also while a fetch is in flight; a
    /// half-finished fetch leaves the pool untouched. Any manager error ends
    /// the loop and is returned as-is; deciding whether that is fatal is up to
    /// the caller.
    pub async fn execute(
        &mut self,
        mut responses: mpsc::UnboundedReceiver<UserResponse>,
    ) -> Result<(), RunTriviaError> {
        let token = self.cancellation_token.clone().unwrap_or_default();
        let mut ticker = tokio::time::interval(self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut responses_open = true;

        info!(
            "Starting trivia loop (interval: {:?}, tick: {:?})",
            self.manager.interaction_interval(),
            self.tick_period
        );

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    info!("Trivia loop cancelled");
                    return Ok(());
                }

                _ = ticker.tick() => {
                    tokio::select! {
                        biased;

                        _ = token.cancelled() => {
                            info!("Trivia loop cancelled during tick");
                            return Ok(());
                        }
                        result = self.manager.tick() => {
                            if let Some(question) = result? {
                                debug!("Asked question {}", question.id());
                            }
                        }
                    }
                }

                response = responses.recv(), if responses_open => match response {
                    Some(response) => self.handle_response(response),
                    None => {
                        debug!("User response channel closed");
                        responses_open = false;
                    }
                },
            }
        }
    }

    fn handle_response(&mut self, response: UserResponse) {
        match response {
            UserResponse::Answer { question, answer } => {
                info!("User answering \"{}\"", question);
                self.manager.answer(&question, &answer);
            }
            UserResponse::Dismiss { question } => {
                info!("User dismissing \"{}\"", question);
                self.manager.dismiss(&question);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::question_events::{ChannelEventListener, QuestionEvent};
    use crate::ports::question_source::SourceError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;
    use trivia_domain::{QuestionCategory, QuestionDifficulty, QuestionQuery, QuestionType};

    struct FixedSource {
        result: Mutex<Option<Result<Vec<Question>, SourceError>>>,
    }

    impl FixedSource {
        fn new(result: Result<Vec<Question>, SourceError>) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(result)),
            })
        }
    }

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn fetch(&self, _query: &QuestionQuery) -> Result<Vec<Question>, SourceError> {
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(SourceError::Transport("exhausted".to_string())))
        }
    }

    fn paris() -> Question {
        Question::new(
            QuestionCategory::Geography,
            QuestionDifficulty::Easy,
            QuestionType::MultipleChoice,
            "What is the capital of France?",
            "Paris",
            vec!["Lyon".to_string(), "Nice".to_string(), "Lille".to_string()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_cancelled_before_start_returns_ok() {
        let manager = QuestionManager::new(FixedSource::new(Ok(vec![])), Duration::ZERO);
        let token = CancellationToken::new();
        token.cancel();
        let mut use_case =
            RunTriviaUseCase::new(manager, Duration::from_millis(10)).with_cancellation(token);
        let (_tx, rx) = mpsc::unbounded_channel();

        use_case.execute(rx).await.unwrap();

        assert_eq!(use_case.manager().answered_len(), 0);
    }

    #[tokio::test]
    async fn test_asks_then_applies_user_answer() {
        let mut manager =
            QuestionManager::new(FixedSource::new(Ok(vec![paris()])), Duration::from_secs(3600));
        let (listener, mut events) = ChannelEventListener::channel();
        manager.subscribe(Arc::new(listener));

        let token = CancellationToken::new();
        let mut use_case = RunTriviaUseCase::new(manager, Duration::from_millis(10))
            .with_cancellation(token.clone());
        let (tx, rx) = mpsc::unbounded_channel();

        let ui = tokio::spawn(async move {
            let asked = match events.recv().await {
                Some(QuestionEvent::Asked(q)) => q,
                other => panic!("expected ask, got {:?}", other),
            };
            tx.send(UserResponse::Answer {
                question: asked.clone(),
                answer: "Paris".to_string(),
            })
            .unwrap();
            // Stale second click
            tx.send(UserResponse::Answer {
                question: asked,
                answer: "Paris".to_string(),
            })
            .unwrap();

            let answered = match events.recv().await {
                Some(QuestionEvent::Answered(a)) => a,
                other => panic!("expected answer, got {:?}", other),
            };
            token.cancel();
            (answered, events)
        });

        use_case.execute(rx).await.unwrap();
        let (answered, mut events) = ui.await.unwrap();

        assert!(answered.is_correct);
        assert!(events.try_recv().is_err());
        assert!(use_case.manager().is_answered(paris().id()));
    }

    #[tokio::test]
    async fn test_dismiss_is_recorded() {
        let manager =
            QuestionManager::new(FixedSource::new(Ok(vec![])), Duration::from_secs(3600));
        let token = CancellationToken::new();
        let mut use_case = RunTriviaUseCase::new(manager, Duration::from_secs(3600))
            .with_cancellation(token.clone());

        // An earlier interaction keeps the first tick from fetching
        let earlier = Question::new(
            QuestionCategory::Art,
            QuestionDifficulty::Hard,
            QuestionType::TrueFalse,
            "Mona Lisa was painted by Michelangelo.",
            "False",
            vec!["True".to_string()],
        )
        .unwrap();
        use_case.manager.dismiss(&earlier);

        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(UserResponse::Dismiss { question: paris() }).unwrap();
        drop(tx);

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        use_case.execute(rx).await.unwrap();
        canceller.await.unwrap();

        assert_eq!(use_case.manager().answered_len(), 2);
        assert!(use_case.manager().is_answered(paris().id()));
    }

    #[tokio::test]
    async fn test_source_failure_ends_loop() {
        let manager = QuestionManager::new(
            FixedSource::new(Err(SourceError::Status { status: 503 })),
            Duration::ZERO,
        );
        let mut use_case = RunTriviaUseCase::new(manager, Duration::from_millis(10));
        let (_tx, rx) = mpsc::unbounded_channel();

        let err = use_case.execute(rx).await.unwrap_err();

        assert!(matches!(
            err,
            RunTriviaError::Manager(ManagerError::Source(SourceError::Status { status: 503 }))
        ));
    }
}
