//! `/api/genres` handlers.

use super::delete_and_echo;
use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::models::{Genre, Quiz};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/genres",
    tag = "genres",
    request_body = Genre,
    responses((status = 200, description = "Created genre; Quizzes is null", body = Genre))
)]
pub async fn create_genre(
    State(state): State<AppState>,
    LenientJson(genre): LenientJson<Genre>,
) -> Result<Json<Genre>, AppError> {
    let genre = state
        .store
        .create(Genre { id: 0, quizzes: None, ..genre })
        .await?;
    tracing::info!(id = genre.id, "genre created");
    Ok(Json(genre))
}

/// Each genre comes back with the quizzes that reference it, one lookup per genre.
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses((
        status = 200,
        description = "All genres with their quizzes; a genre without quizzes lists `Quizzes` as `[]`, not `null`",
        body = Vec<Genre>
    ))
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    let mut genres: Vec<Genre> = state.store.find_all().await?;
    for genre in &mut genres {
        let quizzes = state
            .store
            .find_by_foreign_key::<Quiz>(Quiz::GENRE_ID, genre.id)
            .await?;
        genre.quizzes = Some(quizzes);
    }
    Ok(Json(genres))
}

/// Quizzes of the genre are left in place.
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    tag = "genres",
    params(("id" = i64, Path, description = "Genre id")),
    responses((status = 200, description = "Deleted, or nothing matched; echoes an empty genre", body = Genre))
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Genre>, AppError> {
    delete_and_echo(&state, &id).await
}
