//! `/api/quizzes` handlers.

use super::delete_and_echo;
use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::models::Quiz;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// The genre id is stored as given; it need not name an existing genre.
#[utoipa::path(
    post,
    path = "/api/quizzes",
    tag = "quizzes",
    request_body = Quiz,
    responses((status = 200, description = "Created quiz", body = Quiz))
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    LenientJson(quiz): LenientJson<Quiz>,
) -> Result<Json<Quiz>, AppError> {
    let quiz = state
        .store
        .create(Quiz { id: 0, questions: None, ..quiz })
        .await?;
    tracing::info!(id = quiz.id, genre_id = quiz.genre_id, "quiz created");
    Ok(Json(quiz))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/{id}",
    tag = "quizzes",
    params(("id" = i64, Path, description = "Quiz id")),
    responses((status = 200, description = "Deleted, or nothing matched; echoes an empty quiz", body = Quiz))
)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quiz>, AppError> {
    delete_and_echo(&state, &id).await
}
