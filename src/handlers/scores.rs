//! `/api/scores` handlers.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::models::Score;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// Body of a successful score submission.
pub const DONE: &str = "Done";

#[utoipa::path(
    post,
    path = "/api/scores",
    tag = "scores",
    request_body = Score,
    responses((status = 200, description = "Stored; answers with the JSON string \"Done\"", body = String))
)]
pub async fn create_score(
    State(state): State<AppState>,
    LenientJson(score): LenientJson<Score>,
) -> Result<Json<&'static str>, AppError> {
    let score = state.store.create(Score { id: 0, ..score }).await?;
    tracing::info!(id = score.id, user_id = score.user_id, quiz_id = score.quiz_id, "score recorded");
    Ok(Json(DONE))
}

/// `{id}` is a user id.
#[utoipa::path(
    get,
    path = "/api/scores/{id}",
    tag = "scores",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Scores of the user", body = Vec<Score>))
)]
pub async fn list_user_scores(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Score>>, AppError> {
    let Some(user_id) = parse_id(&id) else {
        return Ok(Json(Vec::new()));
    };
    let scores = state
        .store
        .find_by_foreign_key::<Score>(Score::USER_ID, user_id)
        .await?;
    Ok(Json(scores))
}
