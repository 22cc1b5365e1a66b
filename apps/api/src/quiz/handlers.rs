//! Axum route handlers for the Quiz API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ValidationError};
use crate::models::career::CareerMatch;
use crate::models::quiz::{Answer, AnswerSet, ProfileScores, Question};
use crate::quiz::scorer::score;
use crate::quiz::session::QuizSession;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Ids of the questions the quiz was built from.
    pub question_ids: Vec<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub profile: ProfileScores,
    pub matches: Vec<CareerMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quiz/score
///
/// Stateless scoring for clients that keep quiz state themselves.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let strict = state.config.strict_validation;

    let mut questions: Vec<Question> = Vec::with_capacity(request.question_ids.len());
    for id in &request.question_ids {
        match state.bank.iter().find(|q| &q.id == id) {
            Some(question) if !questions.contains(question) => questions.push(question.clone()),
            Some(_) => {}
            None if strict => return Err(ValidationError::UnknownQuestion(id.clone()).into()),
            None => {}
        }
    }

    if strict {
        for answer in &request.answers {
            let question = questions
                .iter()
                .find(|q| q.id == answer.question_id)
                .ok_or_else(|| ValidationError::UnknownQuestion(answer.question_id.clone()))?;
            if !question.offers(&answer.selected_option) {
                return Err(ValidationError::UnknownOption {
                    question_id: answer.question_id.clone(),
                    option: answer.selected_option.clone(),
                }
                .into());
            }
        }
    }

    let answers: AnswerSet = request.answers.into_iter().collect();
    let profile = score(&questions, &answers);
    let matches = state.matcher.rank(&profile, &state.catalog);

    Ok(Json(ScoreResponse { profile, matches }))
}

/// POST /api/v1/quiz/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<QuizSession>) {
    let session = state.sessions.create(state.config.session_ttl()).await;
    info!(session_id = %session.id, "Quiz session created");
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/quiz/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizSession>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/quiz/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/quiz/sessions/:id/start
pub async fn handle_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizSession>, AppError> {
    let settings = state.sample_settings();
    let session = state
        .sessions
        .update(id, |session| {
            session.start(&state.bank, settings, &mut rand::thread_rng())?;
            Ok(session.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/quiz/sessions/:id/answers
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(answer): Json<Answer>,
) -> Result<Json<QuizSession>, AppError> {
    let session = state
        .sessions
        .update(id, |session| {
            session.answer(
                answer,
                state.config.strict_validation,
                state.matcher.as_ref(),
                &state.catalog,
            )?;
            Ok(session.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/quiz/sessions/:id/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizSession>, AppError> {
    let session = state
        .sessions
        .update(id, |session| {
            session.submit(state.matcher.as_ref(), &state.catalog)?;
            Ok(session.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/quiz/sessions/:id/retake
pub async fn handle_retake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizSession>, AppError> {
    let session = state
        .sessions
        .update(id, |session| {
            session.retake();
            Ok(session.clone())
        })
        .await?;
    Ok(Json(session))
}
