//! Per-session quiz state machine and the in-memory store that holds sessions.
//!
//! NotStarted → InProgress → Submitted. `retake` returns any state to
//! NotStarted and drops all answers and results. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::careers::matcher::CareerMatcher;
use crate::errors::{AppError, ValidationError};
use crate::models::career::{Career, CareerMatch};
use crate::models::quiz::{Answer, AnswerSet, ProfileScores, Question};
use crate::quiz::{sampler, scorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizState {
    NotStarted,
    InProgress {
        questions: Vec<Question>,
        answers: AnswerSet,
        /// Position of the next question to show.
        question_index: usize,
    },
    Submitted {
        questions: Vec<Question>,
        answers: AnswerSet,
        profile: ProfileScores,
        matches: Vec<CareerMatch>,
    },
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::NotStarted => "not_started",
            QuizState::InProgress { .. } => "in_progress",
            QuizState::Submitted { .. } => "submitted",
        }
    }
}

/// Sampling parameters applied when a session starts.
#[derive(Debug, Clone, Copy)]
pub struct SampleSettings {
    pub question_count: usize,
    pub per_category_cap: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: QuizState,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: QuizState::NotStarted,
        }
    }

    /// Samples the question set. Only valid before the quiz has started.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &[Question],
        settings: SampleSettings,
        rng: &mut R,
    ) -> Result<(), AppError> {
        if self.state != QuizState::NotStarted {
            return Err(self.wrong_state("start"));
        }

        let questions = sampler::sample(
            bank,
            settings.question_count,
            settings.per_category_cap,
            rng,
        );
        info!(session_id = %self.id, questions = questions.len(), "Quiz started");

        self.state = QuizState::InProgress {
            questions,
            answers: AnswerSet::new(),
            question_index: 0,
        };
        Ok(())
    }

    /// Records an answer. Answering the last sampled question submits the quiz.
    ///
    /// Answers for questions outside the sampled set, or with an option the
    /// question does not offer, are dropped unless `strict` is set.
    pub fn answer(
        &mut self,
        answer: Answer,
        strict: bool,
        matcher: &dyn CareerMatcher,
        catalog: &[Career],
    ) -> Result<(), AppError> {
        let QuizState::InProgress {
            questions,
            answers,
            question_index,
        } = &mut self.state
        else {
            return Err(self.wrong_state("answer"));
        };

        let Some(position) = questions.iter().position(|q| q.id == answer.question_id) else {
            if strict {
                return Err(ValidationError::UnknownQuestion(answer.question_id).into());
            }
            debug!(session_id = %self.id, question_id = %answer.question_id, "Ignoring answer for unknown question");
            return Ok(());
        };

        if !questions[position].offers(&answer.selected_option) {
            if strict {
                return Err(ValidationError::UnknownOption {
                    question_id: answer.question_id,
                    option: answer.selected_option,
                }
                .into());
            }
            debug!(session_id = %self.id, question_id = %answer.question_id, "Ignoring answer with unknown option");
            return Ok(());
        }

        let is_last = position + 1 == questions.len();
        answers.record(answer);
        *question_index = position + 1;

        if is_last {
            self.submit(matcher, catalog)?;
        }
        Ok(())
    }

    /// Scores the collected answers and ranks the catalog, exactly once.
    pub fn submit(
        &mut self,
        matcher: &dyn CareerMatcher,
        catalog: &[Career],
    ) -> Result<(), AppError> {
        let (questions, answers) = match std::mem::replace(&mut self.state, QuizState::NotStarted) {
            QuizState::InProgress {
                questions, answers, ..
            } => (questions, answers),
            other => {
                self.state = other;
                return Err(self.wrong_state("submit"));
            }
        };

        if answers.is_empty() {
            debug!(session_id = %self.id, "Submitting quiz with no answers");
        }
        let profile = scorer::score(&questions, &answers);
        let matches = matcher.rank(&profile, catalog);
        info!(
            session_id = %self.id,
            answered = answers.len(),
            top_match = matches.first().map(|m| m.career.title.as_str()).unwrap_or("none"),
            "Quiz submitted"
        );

        self.state = QuizState::Submitted {
            questions,
            answers,
            profile,
            matches,
        };
        Ok(())
    }

    /// Discards every answer and result and returns to NotStarted.
    pub fn retake(&mut self) {
        info!(session_id = %self.id, from = self.state.name(), "Quiz reset for retake");
        self.state = QuizState::NotStarted;
    }

    fn wrong_state(&self, action: &str) -> AppError {
        AppError::InvalidState(format!(
            "Cannot {action}: quiz is {}",
            self.state.name().replace('_', " ")
        ))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session registry shared across handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
}

impl SessionStore {
    /// Creates a session and prunes any older than `ttl`.
    pub async fn create(&self, ttl: Duration) -> QuizSession {
        let session = QuizSession::new();
        let cutoff = session.created_at - ttl;

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.created_at >= cutoff);
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!(pruned, "Pruned expired quiz sessions");
        }
        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<QuizSession, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))
    }

    /// Applies `f` to the session under the write lock and returns its result.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut QuizSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))?;
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| info!(session_id = %id, "Quiz session abandoned"))
            .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))
    }
}
