//! `/api/questions` handlers.

use super::{delete_and_echo, parse_id};
use crate::error::{AppError, StoreError};
use crate::extractors::LenientJson;
use crate::models::{Question, Quiz};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/questions",
    tag = "questions",
    request_body = Question,
    responses((status = 200, description = "Created question", body = Question))
)]
pub async fn create_question(
    State(state): State<AppState>,
    LenientJson(question): LenientJson<Question>,
) -> Result<Json<Question>, AppError> {
    let question = state.store.create(Question { id: 0, ..question }).await?;
    tracing::info!(id = question.id, quiz_id = question.quiz_id, "question created");
    Ok(Json(question))
}

/// `{id}` is a quiz id. The quiz must exist; its question list may be empty.
#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Quiz id")),
    responses(
        (status = 200, description = "Questions of the quiz", body = Vec<Question>),
        (status = 404, description = "No such quiz")
    )
)]
pub async fn list_quiz_questions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Question>>, AppError> {
    let quiz_id = parse_id(&id).ok_or(StoreError::NotFound)?;
    let quiz: Quiz = state.store.find_by_id(quiz_id).await?;
    let questions = state
        .store
        .find_by_foreign_key::<Question>(Question::QUIZ_ID, quiz.id)
        .await?;
    Ok(Json(questions))
}

/// Reserved. Editing is not supported; the body is ignored and nothing is written.
#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses((status = 501, description = "Editing questions is not implemented"))
)]
pub async fn edit_question(Path(id): Path<String>) -> Result<Json<Question>, AppError> {
    tracing::debug!(id = %id, "edit question requested");
    Err(AppError::NotImplemented("editing questions"))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses((status = 200, description = "Deleted, or nothing matched; echoes an empty question", body = Question))
)]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>, AppError> {
    delete_and_echo(&state, &id).await
}
