//! Question manager
//!
//! Holds the pool of unseen questions and the set of resolved ones, and
//! decides when the next question may be asked.
//!
//! # Flow
//!
//! ```text
//! tick() ── interval not elapsed ──> no-op
//!    │
//!    └─ elapsed ─> next_question() ─ pool empty? ─> fetch + enqueue unanswered
//!                       │
//!                       └─> ask() ── "asked" ──> listeners
//!
//! answer() ── first time for this id ──> "answered" ──> listeners
//! dismiss() ── recorded as resolved, no event
//! ```
//!
//! The manager has exactly one owner. Every mutating method takes `&mut self`,
//! so concurrent use is ruled out by the borrow checker instead of a lock.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::question_events::QuestionEventListener;
use crate::ports::question_source::{QuestionSource, SourceError};
use chrono::{DateTime, Utc};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use trivia_domain::{AnsweredQuestion, Question, QuestionId, QuestionQuery};

/// Errors that can escape the question manager
#[derive(Error, Debug, Clone)]
pub enum ManagerError {
    #[error("Question source error: {0}")]
    Source(#[from] SourceError),
}

/// Pool, answered set and interaction timing for one trivia session
pub struct QuestionManager<S: QuestionSource + 'static> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    listeners: Vec<Arc<dyn QuestionEventListener>>,
    query: QuestionQuery,
    interaction_interval: Duration,
    pool: VecDeque<Question>,
    answered: HashSet<QuestionId>,
    last_interaction: DateTime<Utc>,
}

impl<S: QuestionSource + 'static> QuestionManager<S> {
    /// Create a manager with an empty pool
    ///
    /// The last interaction starts at the Unix epoch, so the first tick
    /// asks immediately.
    pub fn new(source: Arc<S>, interaction_interval: Duration) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            listeners: Vec::new(),
            query: QuestionQuery::default(),
            interaction_interval,
            pool: VecDeque::new(),
            answered: HashSet::new(),
            last_interaction: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Use a different query when refilling the pool
    pub fn with_query(mut self, query: QuestionQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a listener for "asked" and "answered" events
    pub fn subscribe(&mut self, listener: Arc<dyn QuestionEventListener>) {
        self.listeners.push(listener);
    }

    // ==================== Operations ====================

    /// Ask the next question if the interaction interval has elapsed
    ///
    /// Returns the asked question, or `None` when it is too early. Source
    /// failures while refilling the pool propagate unchanged.
    pub async fn tick(&mut self) -> Result<Option<Question>, ManagerError> {
        if !self.interval_elapsed() {
            return Ok(None);
        }

        let question = self.next_question().await?;
        self.ask(&question);
        Ok(Some(question))
    }

    /// Dequeue the next unseen question, fetching batches until one is available
    ///
    /// May wait for several network round trips, including the source's own
    /// rate-limit retries.
    pub async fn next_question(&mut self) -> Result<Question, ManagerError> {
        loop {
            if let Some(question) = self.pool.pop_front() {
                return Ok(question);
            }
            self.fill_pool().await?;
        }
    }

    /// Record an interaction and announce `question`
    pub fn ask(&mut self, question: &Question) {
        self.touch();
        info!("Ask: \"{}\"", question);
        for listener in &self.listeners {
            listener.on_question_asked(question);
        }
    }

    /// Resolve `question` with the user's answer
    ///
    /// The first answer for a question id records it, resets the interaction
    /// timer and fires "answered". Any later answer for the same id (a stale
    /// UI callback, a double click) is ignored. Returns whether the answer
    /// was recorded.
    pub fn answer(&mut self, question: &Question, answer: &str) -> bool {
        if !self.answered.insert(question.id()) {
            debug!("Ignoring repeated answer for question {}", question.id());
            return false;
        }

        self.touch();
        let answered = AnsweredQuestion::new(question.clone(), answer);
        info!(
            "Answer: \"{}\" with \"{}\" which is {}",
            question,
            answer,
            if answered.is_correct {
                "correct"
            } else {
                "incorrect"
            }
        );
        for listener in &self.listeners {
            listener.on_question_answered(&answered);
        }
        true
    }

    /// Resolve `question` without an answer, so it is never offered again
    pub fn dismiss(&mut self, question: &Question) {
        self.touch();
        self.answered.insert(question.id());
        info!("Dismiss: \"{}\"", question);
    }

    // ==================== Inspection ====================

    /// Number of fetched questions waiting to be asked
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Number of distinct question ids answered or dismissed
    pub fn answered_len(&self) -> usize {
        self.answered.len()
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answered.contains(&id)
    }

    pub fn last_interaction(&self) -> DateTime<Utc> {
        self.last_interaction
    }

    pub fn interaction_interval(&self) -> Duration {
        self.interaction_interval
    }

    /// Time since the last ask, answer or dismiss
    ///
    /// Negative spans (the clock moved backwards) read as zero.
    pub fn time_since_last_interaction(&self) -> Duration {
        (self.clock.now() - self.last_interaction)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    // ==================== Internals ====================

    fn interval_elapsed(&self) -> bool {
        match (self.clock.now() - self.last_interaction).to_std() {
            Ok(elapsed) => elapsed >= self.interaction_interval,
            Err(_) => false,
        }
    }

    fn touch(&mut self) {
        self.last_interaction = self.clock.now();
    }

    /// Fetch one batch and enqueue every question not already resolved
    async fn fill_pool(&mut self) -> Result<(), ManagerError> {
        let batch = self.source.fetch(&self.query).await?;
        let fetched = batch.len();

        let before = self.pool.len();
        let answered = &self.answered;
        self.pool
            .extend(batch.into_iter().filter(|q| !answered.contains(&q.id())));

        debug!(
            "Fetched {} questions, {} added to pool",
            fetched,
            self.pool.len() - before
        );
        Ok(())
    }
}
