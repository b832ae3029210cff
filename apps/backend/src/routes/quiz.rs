//! Quiz session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use quiz_core::{build_session, MAX_QUESTIONS};

use crate::error::Result;
use crate::models::{AnswerRequest, AnswerResponse, SessionView, StartQuizResponse};
use crate::AppState;

/// POST /api/quiz/{user_id}
///
/// Builds a fresh session from the user's saved list and the static
/// distractor pool. An empty list maps to 404 so the client can show
/// "no saved words".
pub async fn start(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StartQuizResponse>> {
    let raw = state.db.list_entry_strings(&user_id).await?;
    let session = build_session(&raw, &state.distractors, MAX_QUESTIONS)?;

    let view = SessionView::from_session(&session);
    let session_id = state.sessions.insert(session);

    tracing::debug!(%session_id, user_id, questions = view.question_count, "quiz session started");
    Ok(Json(StartQuizResponse { session_id, view }))
}

/// GET /api/quiz/session/{id}
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let session = state.sessions.get(id)?;
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/quiz/session/{id}/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let (correct, session) = state.sessions.submit(id, &payload.option)?;
    Ok(Json(AnswerResponse {
        correct,
        view: SessionView::from_session(&session),
    }))
}

/// POST /api/quiz/session/{id}/reset
///
/// "Try again with the same deck": counters restart, the questions and
/// their option order are kept as built.
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let session = state.sessions.reset(id)?;
    Ok(Json(SessionView::from_session(&session)))
}

/// DELETE /api/quiz/session/{id}
pub async fn discard(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
